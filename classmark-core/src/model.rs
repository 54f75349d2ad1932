//! Data model shared between the REST client and the view layer.
//!
//! The collaborator service owns persistence and the authoritative
//! business rules; these types mirror its wire shapes plus the local
//! validation performed before a request is built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One student on the class roster. Students are deactivated rather
/// than deleted, so `active` travels with every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_number: u32,
    pub name: String,
    #[serde(default = "default_active", alias = "is_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

/// A named evaluation axis with a maximum score, e.g. a spelling quiz
/// scored out of 10 or a jump-rope count out of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub max_score: f64,
}

/// One scored observation of one student in one category on one date.
/// Dates are ISO `YYYY-MM-DD` strings; the service does not enforce
/// uniqueness per (student, category, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: i64,
    pub student_id: i64,
    pub category_id: i64,
    pub score: f64,
    pub evaluation_date: String,
}

/// Creation payload for a single roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub student_number: u32,
    pub name: String,
}

/// Creation payload for a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub max_score: f64,
}

/// Creation payload for an evaluation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvaluation {
    pub student_id: i64,
    pub category_id: i64,
    pub score: f64,
    pub evaluation_date: String,
}

/// Update payload for an existing evaluation. The date travels with the
/// score so a pending cell commit can persist under a renamed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPatch {
    pub score: f64,
    pub evaluation_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("Enter a category name.")]
    EmptyName,
    #[error("The maximum score must be greater than zero.")]
    NonPositiveMax,
}

/// Validate category input before any request is made.
///
/// # Errors
///
/// Returns an error when the name is blank or the maximum score is not a
/// positive number.
pub fn validate_new_category(name: &str, max_score: f64) -> Result<NewCategory, CategoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryError::EmptyName);
    }
    if !(max_score > 0.0) {
        return Err(CategoryError::NonPositiveMax);
    }
    Ok(NewCategory {
        name: name.to_string(),
        max_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_validation_rejects_blank_name() {
        assert_eq!(
            validate_new_category("   ", 10.0),
            Err(CategoryError::EmptyName)
        );
    }

    #[test]
    fn category_validation_rejects_non_positive_max() {
        assert_eq!(
            validate_new_category("받아쓰기", 0.0),
            Err(CategoryError::NonPositiveMax)
        );
        assert_eq!(
            validate_new_category("받아쓰기", -5.0),
            Err(CategoryError::NonPositiveMax)
        );
        assert_eq!(
            validate_new_category("받아쓰기", f64::NAN),
            Err(CategoryError::NonPositiveMax)
        );
    }

    #[test]
    fn category_validation_trims_the_name() {
        let category = validate_new_category(" 줄넘기 ", 50.0).expect("valid category");
        assert_eq!(category.name, "줄넘기");
        assert!((category.max_score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn student_deserializes_with_is_active_alias() {
        let student: Student =
            serde_json::from_str(r#"{"id":1,"student_number":3,"name":"김하늘","is_active":false}"#)
                .expect("student json");
        assert!(!student.active);
    }

    #[test]
    fn student_active_defaults_to_true() {
        let student: Student =
            serde_json::from_str(r#"{"id":1,"student_number":3,"name":"김하늘"}"#)
                .expect("student json");
        assert!(student.active);
    }
}
