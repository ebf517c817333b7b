use thiserror::Error;

/// Recoverable store failures, reported back to the command layer.
///
/// None of these are process-fatal: the domain variants are rendered as
/// user-facing messages, and the I/O variants surface as a generic
/// "operation failed". A failed write never leaves the in-memory state
/// diverged from disk (see [`crate::store::Store`]).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("warning amount must be a positive integer")]
    InvalidAmount,

    #[error("no matching warning record")]
    NotFound,

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("insufficient funds: have {balance}, need {cost}")]
    InsufficientFunds { balance: i64, cost: i64 },

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
