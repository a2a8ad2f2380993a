//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ClimateError`] via `From`, so use-cases can propagate with `?`.

/// Top-level error returned by every climate use-case.
#[derive(Debug, thiserror::Error)]
pub enum ClimateError {
    /// A date supplied by the caller could not be parsed or shifted.
    #[error("invalid date")]
    InvalidDate(#[from] InvalidDateError),

    /// An aggregate was requested over a store without observations.
    #[error("no data")]
    NoData(#[from] NoDataError),

    /// The backing store could not be reached or a query failed.
    #[error("store unavailable")]
    StoreUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A date value that is not a valid `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date {value:?}, expected YYYY-MM-DD")]
pub struct InvalidDateError {
    pub value: String,
}

impl InvalidDateError {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// The store holds no observations, so no latest date exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no observations recorded")]
pub struct NoDataError;
