//! Error types for the trading desk.

use thiserror::Error;

/// Top-level desk error.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Order rejected: {0}")]
    Order(#[from] OrderError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Caller-input rejections raised during order validation.
///
/// These surface to the caller layer as client errors and are never
/// retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Quantity must be greater than 0")]
    InvalidQuantity,

    #[error("Invalid instrument symbol: {0}")]
    UnknownInstrument(String),

    #[error("Price must be specified for LIMIT orders")]
    MissingLimitPrice,

    #[error("Insufficient holdings. Available: {available}, Requested: {requested}")]
    InsufficientHoldings { available: i64, requested: i64 },
}

/// Persistence-layer faults.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Instrument not found: {0}")]
    InstrumentMissing(String),
}

/// Result type alias for desk operations.
pub type DeskResult<T> = Result<T, DeskError>;
