//! Core types and traits for the trading desk.
//!
//! This crate provides the foundational building blocks including:
//! - Instrument reference data
//! - Order, trade, and position types
//! - The shared error taxonomy
//! - The `Desk` trait consumed by the request-handling layer

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DeskError, DeskResult, OrderError, StoreError};
pub use traits::Desk;
pub use types::*;
