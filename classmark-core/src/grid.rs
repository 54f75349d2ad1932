//! Evaluation grid derivation: the student × date matrix for one category.
//!
//! Date columns are client-side view state derived from the fetched
//! records. Adding or renaming a column never touches the collaborator;
//! a record only exists once a cell commit creates or updates it.

use crate::model::Evaluation;
use crate::numbers::usize_to_f64;
use chrono::NaiveDate;
use std::cmp::{Ordering, Reverse};

/// Compare two ISO date strings in ascending calendar order. Strings
/// that do not parse sort after every real date, by raw text.
#[must_use]
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(a), parse(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn sort_descending(dates: &mut Vec<String>) {
    // Descending by calendar date, with unparseable strings kept last.
    dates.sort_by_key(|d| Reverse(NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()));
    dates.dedup();
}

/// Derive the grid's columns: the distinct evaluation dates, strictly
/// descending regardless of the order records arrived in.
#[must_use]
pub fn date_columns(evaluations: &[Evaluation]) -> Vec<String> {
    let mut dates: Vec<String> = evaluations
        .iter()
        .map(|e| e.evaluation_date.clone())
        .collect();
    sort_descending(&mut dates);
    dates
}

/// Insert a new date column, keeping the descending order. Inserting a
/// date that is already a column is a no-op.
#[must_use]
pub fn add_date_column(dates: &[String], date: &str) -> Vec<String> {
    let mut next = dates.to_vec();
    if !next.iter().any(|d| d == date) {
        next.push(date.to_string());
    }
    sort_descending(&mut next);
    next
}

/// Rename a date column. This regroups future cell lookups under the new
/// key and re-sorts the columns; already-saved records keep their stored
/// date until their cell is next committed (no rename cascade).
#[must_use]
pub fn rename_date_column(dates: &[String], old: &str, new: &str) -> Vec<String> {
    let mut next = dates.to_vec();
    if let Some(slot) = next.iter_mut().find(|d| d.as_str() == old) {
        *slot = new.to_string();
    }
    sort_descending(&mut next);
    next
}

/// Look up the saved record for one cell by exact (student, date) key.
#[must_use]
pub fn find_evaluation<'a>(
    evaluations: &'a [Evaluation],
    student_id: i64,
    date: &str,
) -> Option<&'a Evaluation> {
    evaluations
        .iter()
        .find(|e| e.student_id == student_id && e.evaluation_date == date)
}

/// Per-row derived values across one student's records in the category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowStats {
    pub average: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub count: usize,
}

/// Compute average, minimum, and maximum for one student's row.
#[must_use]
pub fn row_stats(evaluations: &[Evaluation], student_id: i64) -> RowStats {
    let scores: Vec<f64> = evaluations
        .iter()
        .filter(|e| e.student_id == student_id)
        .map(|e| e.score)
        .collect();
    if scores.is_empty() {
        return RowStats::default();
    }
    let sum: f64 = scores.iter().sum();
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    RowStats {
        average: Some(sum / usize_to_f64(scores.len())),
        min: Some(min),
        max: Some(max),
        count: scores.len(),
    }
}

/// Extreme-cell flag for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    Min,
    Max,
}

/// Decide whether a cell holds the row's extreme score. When the row's
/// minimum equals its maximum every value is trivially both, so nothing
/// is flagged.
#[must_use]
pub fn cell_highlight(score: f64, stats: &RowStats) -> Highlight {
    let (Some(min), Some(max)) = (stats.min, stats.max) else {
        return Highlight::None;
    };
    if (max - min).abs() < f64::EPSILON {
        return Highlight::None;
    }
    if (score - max).abs() < f64::EPSILON {
        Highlight::Max
    } else if (score - min).abs() < f64::EPSILON {
        Highlight::Min
    } else {
        Highlight::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(id: i64, student_id: i64, score: f64, date: &str) -> Evaluation {
        Evaluation {
            id,
            student_id,
            category_id: 1,
            score,
            evaluation_date: date.to_string(),
        }
    }

    #[test]
    fn date_columns_are_distinct_and_descending() {
        let evals = vec![
            eval(1, 1, 10.0, "2026-03-02"),
            eval(2, 2, 8.0, "2026-03-09"),
            eval(3, 1, 9.0, "2026-03-09"),
            eval(4, 2, 7.0, "2026-02-23"),
        ];
        assert_eq!(
            date_columns(&evals),
            vec!["2026-03-09", "2026-03-02", "2026-02-23"]
        );
    }

    #[test]
    fn column_order_ignores_insertion_order() {
        let dates = vec!["2026-03-02".to_string(), "2026-01-15".to_string()];
        let with_new = add_date_column(&dates, "2026-02-01");
        assert_eq!(with_new, vec!["2026-03-02", "2026-02-01", "2026-01-15"]);
    }

    #[test]
    fn adding_an_existing_column_is_a_no_op() {
        let dates = vec!["2026-03-02".to_string()];
        assert_eq!(add_date_column(&dates, "2026-03-02"), dates);
    }

    #[test]
    fn renaming_a_column_regroups_without_touching_records() {
        let evals = vec![eval(1, 1, 10.0, "2026-03-02")];
        let dates = date_columns(&evals);
        let renamed = rename_date_column(&dates, "2026-03-02", "2026-03-03");
        assert_eq!(renamed, vec!["2026-03-03"]);
        // The saved record still lives under its original date: the lookup
        // by the new key finds nothing, and no cascade happened.
        assert!(find_evaluation(&evals, 1, "2026-03-03").is_none());
        assert!(find_evaluation(&evals, 1, "2026-03-02").is_some());
    }

    #[test]
    fn renaming_onto_an_existing_column_merges_the_headers() {
        let dates = vec!["2026-03-09".to_string(), "2026-03-02".to_string()];
        let renamed = rename_date_column(&dates, "2026-03-02", "2026-03-09");
        assert_eq!(renamed, vec!["2026-03-09"]);
    }

    #[test]
    fn row_stats_compute_mean_min_max() {
        let evals = vec![
            eval(1, 1, 10.0, "2026-03-02"),
            eval(2, 1, 20.0, "2026-03-09"),
            eval(3, 1, 30.0, "2026-03-16"),
            eval(4, 2, 99.0, "2026-03-16"),
        ];
        let stats = row_stats(&evals, 1);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average, Some(20.0));
        assert_eq!(stats.min, Some(10.0));
        assert_eq!(stats.max, Some(30.0));
    }

    #[test]
    fn row_stats_empty_when_student_has_no_records() {
        let stats = row_stats(&[], 1);
        assert_eq!(stats, RowStats::default());
        assert!(stats.average.is_none());
    }

    #[test]
    fn highlight_flags_row_extremes() {
        let evals = vec![
            eval(1, 1, 10.0, "2026-03-02"),
            eval(2, 1, 20.0, "2026-03-09"),
        ];
        let stats = row_stats(&evals, 1);
        assert_eq!(cell_highlight(20.0, &stats), Highlight::Max);
        assert_eq!(cell_highlight(10.0, &stats), Highlight::Min);
    }

    #[test]
    fn no_highlight_when_all_scores_are_equal() {
        let evals = vec![
            eval(1, 1, 15.0, "2026-03-02"),
            eval(2, 1, 15.0, "2026-03-09"),
        ];
        let stats = row_stats(&evals, 1);
        assert_eq!(cell_highlight(15.0, &stats), Highlight::None);
    }

    #[test]
    fn single_record_rows_are_never_highlighted() {
        let evals = vec![eval(1, 1, 15.0, "2026-03-02")];
        let stats = row_stats(&evals, 1);
        assert_eq!(cell_highlight(15.0, &stats), Highlight::None);
    }

    #[test]
    fn unparseable_dates_sort_after_real_ones() {
        let evals = vec![
            eval(1, 1, 1.0, "not-a-date"),
            eval(2, 1, 2.0, "2026-03-02"),
        ];
        assert_eq!(date_columns(&evals), vec!["2026-03-02", "not-a-date"]);
    }
}
