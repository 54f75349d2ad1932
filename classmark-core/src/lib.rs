//! Classmark core
//!
//! Platform-agnostic domain logic for the Classmark student evaluation
//! tracker. This crate holds the data model, validation rules, and the
//! pure view-model derivations (evaluation grid, trend charts) without
//! any UI or browser dependencies.

pub mod auth;
pub mod charts;
pub mod grid;
pub mod model;
pub mod numbers;
pub mod roster;
pub mod score;

// Re-export commonly used types
pub use auth::{MIN_PASSWORD_LEN, PasswordError, validate_new_password};
pub use charts::{
    LineChartModel, LinePoint, LineSeries, RadarAxis, RadarChartModel, RadarPoint, axis_hue, hsl,
    hsla, line_chart, radar_chart, recency_opacity,
};
pub use grid::{
    Highlight, RowStats, add_date_column, cell_highlight, compare_dates, date_columns,
    find_evaluation, rename_date_column, row_stats,
};
pub use model::{
    Category, CategoryError, Evaluation, EvaluationPatch, NewCategory, NewEvaluation, NewStudent,
    Student, validate_new_category,
};
pub use roster::{
    MAX_ROSTER_SIZE, MIN_ROSTER_SIZE, RosterDraft, RosterError, RosterSlot, parse_count,
};
pub use score::{ScoreError, format_average, validate_score};
