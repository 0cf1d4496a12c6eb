//! Trade journal.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use desk_core::types::{Order, Trade};
use desk_store::{MemStore, StoreState};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

/// Append-only journal of executions.
///
/// Trades are created here and nowhere else, exactly once per executed
/// order, and never mutated afterwards.
#[derive(Clone)]
pub struct TradeJournal {
    store: Arc<MemStore>,
}

impl TradeJournal {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// Record the fill of `order` inside the caller's unit of work.
    pub fn record(
        &self,
        state: &mut StoreState,
        order: &Order,
        executed_price: Decimal,
        executed_at: DateTime<Utc>,
    ) -> Trade {
        let trade = Trade::from_order(order, executed_price, executed_at);
        state.insert_trade(trade.clone());
        info!(
            trade_id = %trade.id,
            order_id = %order.id,
            total_value = %trade.total_value,
            "trade recorded"
        );
        trade
    }

    /// The trade produced by an order, if it has executed.
    pub fn for_order(&self, order_id: Uuid) -> Option<Trade> {
        self.store.read(|s| s.trade_for_order(order_id).cloned())
    }

    /// An owner's trades, oldest first.
    pub fn list(&self, owner: &str) -> Vec<Trade> {
        self.store.read(|s| s.trades_for(owner))
    }
}
