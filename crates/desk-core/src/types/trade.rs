//! Trade records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Order, Side};

/// The immutable audit record of one completed fill.
///
/// An order records what was requested; the trade records what actually
/// happened. At most one trade exists per order, created at execution
/// time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade ID
    pub id: Uuid,
    /// The order this trade filled
    pub order_id: Uuid,
    /// Symbol traded
    pub symbol: String,
    /// Side copied from the order
    pub side: Side,
    /// Quantity copied from the order
    pub quantity: i64,
    /// Market price at the execution instant
    pub executed_price: Decimal,
    /// executed_price x quantity, computed once and stored
    pub total_value: Decimal,
    /// When the fill happened
    pub executed_at: DateTime<Utc>,
    /// Owning tenant
    pub owner: String,
}

impl Trade {
    /// Build the audit record for an order filled at `executed_price`.
    pub fn from_order(order: &Order, executed_price: Decimal, executed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: order.id,
            symbol: order.symbol.clone(),
            side: order.side,
            quantity: order.quantity,
            executed_price,
            total_value: executed_price * Decimal::from(order.quantity),
            executed_at,
            owner: order.owner.clone(),
        }
    }
}
