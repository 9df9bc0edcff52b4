//! Error types for date parsing.

use thiserror::Error;

/// Errors that can occur when parsing text as a date.
///
/// Every failure is an ordinary value; the engine never panics on user
/// input and never logs. Callers that only need a yes/no answer can use
/// [`is_date`](crate::is_date) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("token '{token}' did not match at position {position}")]
    MatchFailure { position: usize, token: String },

    #[error("day {day} is out of range for month {month} of year {year}")]
    InvalidDayOfMonth { year: i32, month: u32, day: u32 },

    #[error("no candidate format matched")]
    NoCandidateMatched,

    #[error("unknown time unit '{0}'")]
    UnknownUnit(String),
}
