use chrono::NaiveDate;
use thiserror::Error;

/// Crate-wide error type.
///
/// Validation errors are raised at ingestion and surface to the caller with a
/// user-presentable message. The engine stages fail fast on out-of-range data
/// instead of clamping, so bad values are caught upstream. Empty histories and
/// an exhausted catalog are not errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("a check-in for {date} already exists")]
    DuplicateCheckIn { date: NaiveDate },
    #[error("check-in for {date} is earlier than the latest recorded day {last}")]
    OutOfOrderCheckIn { date: NaiveDate, last: NaiveDate },
    #[error("lesson already completed: {lesson_id}")]
    DuplicateCompletion { lesson_id: String },
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}
