//! Desk trait definition.

use crate::error::DeskError;
use crate::types::{Instrument, Order, OrderRequest, Position, Trade};
use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Service surface consumed by the request-handling layer.
///
/// `place_order` is the sole mutating entry point. Absent lookups return
/// `None` rather than an error so the caller can map them to a not-found
/// response; `DeskError` covers rejected input and internal faults.
#[async_trait]
pub trait Desk: Send + Sync {
    /// Validate, persist, and (for market orders) execute an order.
    ///
    /// # Arguments
    /// * `owner` - The tenant placing the order
    /// * `request` - The order request to place
    ///
    /// # Returns
    /// The persisted order: `Executed` for market style, `Placed` for limit
    async fn place_order(&self, owner: &str, request: OrderRequest) -> Result<Order, DeskError>;

    /// Look up an order by ID.
    async fn order(&self, id: Uuid) -> Result<Option<Order>, DeskError>;

    /// Get all of an owner's orders, oldest first.
    async fn orders(&self, owner: &str) -> Result<Vec<Order>, DeskError>;

    /// Get the owner's holdings with current values refreshed against the
    /// latest instrument prices.
    async fn portfolio(&self, owner: &str) -> Result<Vec<Position>, DeskError>;

    /// Get the owner's holding in one symbol, if any.
    async fn holding(&self, owner: &str, symbol: &str) -> Result<Option<Position>, DeskError>;

    /// Total market value across all of the owner's holdings.
    async fn portfolio_value(&self, owner: &str) -> Result<Decimal, DeskError>;

    /// Get all of an owner's trades, oldest first.
    async fn trades(&self, owner: &str) -> Result<Vec<Trade>, DeskError>;

    /// Get the trade produced by an order, if it has executed.
    async fn trade_for_order(&self, order_id: Uuid) -> Result<Option<Trade>, DeskError>;

    /// List all instruments in the directory.
    async fn instruments(&self) -> Result<Vec<Instrument>, DeskError>;

    /// Look up an instrument by symbol.
    async fn instrument(&self, symbol: &str) -> Result<Option<Instrument>, DeskError>;
}
