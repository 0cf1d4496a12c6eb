//! In-memory store and its unit-of-work primitive.

use std::collections::HashMap;
use std::sync::RwLock;

use desk_core::error::StoreError;
use desk_core::types::{Instrument, Order, Position, Trade};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four entity collections.
///
/// Positions are keyed by `owner:symbol` so one owner holds at most one
/// row per symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    instruments: HashMap<String, Instrument>,
    orders: HashMap<Uuid, Order>,
    positions: HashMap<String, Position>,
    trades: HashMap<Uuid, Trade>,
}

fn position_key(owner: &str, symbol: &str) -> String {
    format!("{}:{}", owner, symbol)
}

impl StoreState {
    // --- instruments ---

    pub fn instrument(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.get(symbol)
    }

    /// All instruments, ordered by symbol.
    pub fn instruments(&self) -> Vec<Instrument> {
        let mut all: Vec<Instrument> = self.instruments.values().cloned().collect();
        all.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        all
    }

    pub fn instrument_count(&self) -> usize {
        self.instruments.len()
    }

    pub fn insert_instrument(&mut self, instrument: Instrument) {
        self.instruments
            .insert(instrument.symbol.clone(), instrument);
    }

    /// Price-feed hook. The engine never calls this.
    pub fn set_last_traded_price(
        &mut self,
        symbol: &str,
        price: Decimal,
    ) -> Result<(), StoreError> {
        let instrument = self
            .instruments
            .get_mut(symbol)
            .ok_or_else(|| StoreError::InstrumentMissing(symbol.to_string()))?;
        instrument.last_traded_price = price;
        Ok(())
    }

    // --- orders ---

    pub fn order(&self, id: Uuid) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// An owner's orders, oldest first.
    pub fn orders_for(&self, owner: &str) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .values()
            .filter(|o| o.owner == owner)
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.created_at);
        orders
    }

    /// Insert or overwrite an order row.
    pub fn put_order(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    // --- positions ---

    pub fn position(&self, owner: &str, symbol: &str) -> Option<&Position> {
        self.positions.get(&position_key(owner, symbol))
    }

    /// An owner's positions, ordered by symbol.
    pub fn positions_for(&self, owner: &str) -> Vec<Position> {
        let mut positions: Vec<Position> = self
            .positions
            .values()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect();
        positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        positions
    }

    pub fn put_position(&mut self, position: Position) {
        self.positions
            .insert(position_key(&position.owner, &position.symbol), position);
    }

    pub fn remove_position(&mut self, owner: &str, symbol: &str) {
        self.positions.remove(&position_key(owner, symbol));
    }

    // --- trades ---

    pub fn trade_for_order(&self, order_id: Uuid) -> Option<&Trade> {
        self.trades.values().find(|t| t.order_id == order_id)
    }

    /// An owner's trades, oldest first.
    pub fn trades_for(&self, owner: &str) -> Vec<Trade> {
        let mut trades: Vec<Trade> = self
            .trades
            .values()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect();
        trades.sort_by_key(|t| t.executed_at);
        trades
    }

    pub fn insert_trade(&mut self, trade: Trade) {
        self.trades.insert(trade.id, trade);
    }
}

/// Thread-safe in-memory store.
pub struct MemStore {
    inner: RwLock<StoreState>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::default()),
        }
    }

    /// Wrap a previously loaded state.
    pub fn from_state(state: StoreState) -> Self {
        Self {
            inner: RwLock::new(state),
        }
    }

    /// Run a read-only closure against the current state.
    pub fn read<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        let state = self.inner.read().unwrap();
        f(&state)
    }

    /// Run an infallible mutation against the state.
    pub fn write<T>(&self, f: impl FnOnce(&mut StoreState) -> T) -> T {
        let mut state = self.inner.write().unwrap();
        f(&mut state)
    }

    /// Run `f` as one unit of work.
    ///
    /// The writes inside `f` become visible together when it returns `Ok`;
    /// on `Err` the state is restored to the pre-transaction checkpoint and
    /// nothing takes effect.
    pub fn transaction<T, E>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut state = self.inner.write().unwrap();
        let checkpoint = state.clone();
        match f(&mut state) {
            Ok(value) => Ok(value),
            Err(err) => {
                *state = checkpoint;
                Err(err)
            }
        }
    }

    /// Out-of-band price update from the simulated feed.
    pub fn update_price(&self, symbol: &str, price: Decimal) -> Result<(), StoreError> {
        self.transaction(|state| state.set_last_traded_price(symbol, price))
    }

    /// Clone the full state, e.g. for a snapshot write.
    pub fn snapshot(&self) -> StoreState {
        self.inner.read().unwrap().clone()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}
