//! Chart view-model derivation for the student detail panel.
//!
//! Both charts are pure functions over an immutable snapshot of the
//! student's evaluations joined with the category list. Scores are
//! normalized to a percentage of each category's maximum so axes share
//! one 0..=100 scale.

use crate::grid::compare_dates;
use crate::model::{Category, Evaluation};
use crate::numbers::usize_to_f64;
use std::collections::{BTreeMap, BTreeSet};

/// One plotted value on a category's line.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    /// Index into [`LineChartModel::dates`].
    pub date_index: usize,
    pub date: String,
    pub percent: f64,
}

/// The line for one category, in percent-of-max terms.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub category_id: i64,
    pub name: String,
    pub hue: f64,
    pub points: Vec<LinePoint>,
}

/// Score-over-time view model: one x position per distinct date
/// (ascending) and one series per category present in the data. A
/// category with no record on a date simply has no point there; nothing
/// is interpolated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineChartModel {
    pub dates: Vec<String>,
    pub series: Vec<LineSeries>,
}

/// One historical record plotted on a radar axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarPoint {
    pub percent: f64,
    pub date: String,
    /// Rendering opacity, rising with recency: the oldest record is the
    /// most transparent, the newest fully opaque.
    pub opacity: f64,
}

/// One radar axis: a category and every one of its historical records.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub category_id: i64,
    pub name: String,
    pub hue: f64,
    pub points: Vec<RadarPoint>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarChartModel {
    pub axes: Vec<RadarAxis>,
}

/// Evenly distribute hues across the color wheel by series index.
#[must_use]
pub fn axis_hue(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    usize_to_f64(index) * 360.0 / usize_to_f64(total)
}

/// CSS color for a chart hue.
#[must_use]
pub fn hsl(hue: f64) -> String {
    format!("hsl({hue:.0}, 70%, 50%)")
}

/// CSS color for a chart hue with an alpha channel.
#[must_use]
pub fn hsla(hue: f64, alpha: f64) -> String {
    format!("hsla({hue:.0}, 70%, 50%, {alpha:.2})")
}

/// Opacity for the point at `rank` (0 = oldest) among `total` records.
/// A single-record series is fully opaque.
#[must_use]
pub fn recency_opacity(rank: usize, total: usize) -> f64 {
    if total <= 1 {
        return 1.0;
    }
    0.2 + 0.8 * usize_to_f64(rank) / usize_to_f64(total - 1)
}

fn percent_of_max(evaluation: &Evaluation, category: &Category) -> Option<f64> {
    let percent = evaluation.score / category.max_score * 100.0;
    percent.is_finite().then_some(percent)
}

/// Derive the score-over-time line chart. Every category with at least
/// one record appears; the detail panel's category filter deliberately
/// does not feed into this chart.
#[must_use]
pub fn line_chart(evaluations: &[Evaluation], categories: &[Category]) -> LineChartModel {
    let mut dates: Vec<String> = evaluations
        .iter()
        .map(|e| e.evaluation_date.clone())
        .collect();
    dates.sort_by(|a, b| compare_dates(a, b));
    dates.dedup();

    let index_by_date: BTreeMap<&str, usize> = dates
        .iter()
        .enumerate()
        .map(|(i, d)| (d.as_str(), i))
        .collect();

    let present: Vec<&Category> = categories
        .iter()
        .filter(|c| evaluations.iter().any(|e| e.category_id == c.id))
        .collect();
    let total = present.len();

    let series = present
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            // At most one point per date; a later record for the same date
            // replaces the earlier one, mirroring the grid's convention.
            let mut by_date: BTreeMap<usize, LinePoint> = BTreeMap::new();
            for evaluation in evaluations.iter().filter(|e| e.category_id == category.id) {
                let Some(percent) = percent_of_max(evaluation, category) else {
                    continue;
                };
                let Some(&date_index) = index_by_date.get(evaluation.evaluation_date.as_str()) else {
                    continue;
                };
                by_date.insert(
                    date_index,
                    LinePoint {
                        date_index,
                        date: evaluation.evaluation_date.clone(),
                        percent,
                    },
                );
            }
            LineSeries {
                category_id: category.id,
                name: category.name.clone(),
                hue: axis_hue(index, total),
                points: by_date.into_values().collect(),
            }
        })
        .collect();

    LineChartModel { dates, series }
}

/// Derive the radar chart for the teacher-selected category subset.
/// Each historical record becomes its own point on the category's axis,
/// faded by age.
#[must_use]
pub fn radar_chart(
    evaluations: &[Evaluation],
    categories: &[Category],
    selected: &BTreeSet<i64>,
) -> RadarChartModel {
    let present: Vec<&Category> = categories
        .iter()
        .filter(|c| selected.contains(&c.id))
        .filter(|c| evaluations.iter().any(|e| e.category_id == c.id))
        .collect();
    let total = present.len();

    let axes = present
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            let mut records: Vec<&Evaluation> = evaluations
                .iter()
                .filter(|e| e.category_id == category.id)
                .collect();
            records.sort_by(|a, b| compare_dates(&a.evaluation_date, &b.evaluation_date));

            let count = records.len();
            let points = records
                .into_iter()
                .enumerate()
                .filter_map(|(rank, evaluation)| {
                    percent_of_max(evaluation, category).map(|percent| RadarPoint {
                        percent,
                        date: evaluation.evaluation_date.clone(),
                        opacity: recency_opacity(rank, count),
                    })
                })
                .collect();

            RadarAxis {
                category_id: category.id,
                name: category.name.clone(),
                hue: axis_hue(index, total),
                points,
            }
        })
        .collect();

    RadarChartModel { axes }
}
