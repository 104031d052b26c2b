//! Error types for the core vocabulary.

/// Alias for `Result<T, ZhanError>`.
pub type ZhanResult<T> = Result<T, ZhanError>;

/// Errors raised while interpreting user-supplied calendar input.
#[derive(Debug, thiserror::Error)]
pub enum ZhanError {
    /// A timestamp string matched none of the accepted layouts.
    #[error("invalid timestamp: \"{0}\" (expected YYYY-MM-DD [HH[:MM[:SS]]])")]
    InvalidTimestamp(String),
}
