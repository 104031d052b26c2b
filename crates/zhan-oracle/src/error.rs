//! Error types for the chart engines.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while casting or exporting a chart.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Unrecognized divination method name.
    #[error("unknown method: {0} (expected liuyao, qimen, daliuren or ziwei)")]
    UnknownMethod(String),

    /// Unrecognized six-line cast mode.
    #[error("unknown cast mode: {0} (expected random or time)")]
    UnknownCastMode(String),

    /// Unrecognized Da Liu Ren course seed.
    #[error("unknown course seed: {0} (expected random or day)")]
    UnknownCourseSeed(String),

    /// Name is not a gate, star or spirit.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Calendar error.
    #[error("{0}")]
    Core(#[from] zhan_core::ZhanError),

    /// JSON export failed.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}
