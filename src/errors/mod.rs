use thiserror::Error;

/// Failure taxonomy shared by every query operation.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Malformed or conflicting request parameters; nothing was queried.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    /// No connection could be obtained, as opposed to an empty result.
    #[error("Data store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Query failed: {0:#}")]
    Store(#[from] anyhow::Error),
}

pub type StatsResult<T> = Result<T, StatsError>;

impl StatsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        StatsError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        StatsError::NotFound(message.into())
    }
}
