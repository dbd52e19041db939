use thiserror::Error;

/// Closed set of data-access outcomes, so handlers branch on variants
/// instead of comparing against a sentinel error value.
#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("post not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}
