//! Order engine: validation, placement, and market execution.

use std::sync::Arc;

use chrono::Utc;
use desk_core::error::{DeskError, OrderError};
use desk_core::types::{Order, OrderRequest, OrderStyle, Position, Side};
use desk_store::{MemStore, StoreState};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::locks::SymbolLocks;
use crate::trades::TradeJournal;

/// Validates, creates, and executes orders.
///
/// The whole validate-then-execute sequence for one (owner, symbol) pair
/// runs under that pair's lock, and the create/execute writes run in one
/// store transaction.
pub struct OrderEngine {
    store: Arc<MemStore>,
    journal: TradeJournal,
    locks: SymbolLocks,
}

impl OrderEngine {
    pub fn new(store: Arc<MemStore>, journal: TradeJournal) -> Self {
        Self {
            store,
            journal,
            locks: SymbolLocks::new(),
        }
    }

    /// Place an order for `owner`.
    ///
    /// Validation runs in a fixed order and the first failing check wins:
    /// quantity, then symbol, then limit price, then holdings. A market
    /// order that passes executes synchronously before this returns; a
    /// limit order is persisted as `Placed` and rests.
    pub fn place_order(&self, owner: &str, request: OrderRequest) -> Result<Order, DeskError> {
        info!(
            owner,
            symbol = %request.symbol,
            side = %request.side,
            style = %request.style,
            quantity = request.quantity,
            "placing order"
        );

        let lock = self.locks.acquire(owner, &request.symbol);
        let _guard = lock.lock().unwrap();

        self.validate(owner, &request)?;

        let mut order = Order::from_request(owner, &request);
        debug!(order_id = %order.id, "order validated");

        self.store.transaction(|state| {
            state.put_order(order.clone());

            match order.style {
                OrderStyle::Market => self.execute(state, &mut order)?,
                OrderStyle::Limit => {
                    order.mark_placed();
                    state.put_order(order.clone());
                    info!(order_id = %order.id, "limit order placed, resting");
                }
            }
            Ok(order)
        })
    }

    /// Look up an order by ID.
    pub fn get(&self, id: Uuid) -> Option<Order> {
        self.store.read(|s| s.order(id).cloned())
    }

    /// An owner's orders, oldest first.
    pub fn list(&self, owner: &str) -> Vec<Order> {
        self.store.read(|s| s.orders_for(owner))
    }

    fn validate(&self, owner: &str, request: &OrderRequest) -> Result<(), OrderError> {
        if request.quantity <= 0 {
            return Err(OrderError::InvalidQuantity);
        }

        let known = self.store.read(|s| s.instrument(&request.symbol).is_some());
        if !known {
            return Err(OrderError::UnknownInstrument(request.symbol.clone()));
        }

        if request.style == OrderStyle::Limit {
            match request.limit_price {
                Some(price) if price > Decimal::ZERO => {}
                _ => return Err(OrderError::MissingLimitPrice),
            }
        }

        if request.side == Side::Sell {
            let available = self
                .store
                .read(|s| s.position(owner, &request.symbol).map(|p| p.quantity))
                .unwrap_or(0);
            if available < request.quantity {
                return Err(OrderError::InsufficientHoldings {
                    available,
                    requested: request.quantity,
                });
            }
        }

        Ok(())
    }

    /// Fill a market order at the instrument's last traded price.
    ///
    /// Runs inside the caller's unit of work: the status flip, the trade
    /// record, and the ledger mutation land together or not at all.
    fn execute(&self, state: &mut StoreState, order: &mut Order) -> Result<(), DeskError> {
        let executed_price = state
            .instrument(&order.symbol)
            .map(|i| i.last_traded_price)
            .ok_or_else(|| {
                DeskError::Internal(format!(
                    "instrument {} disappeared during execution",
                    order.symbol
                ))
            })?;

        let now = Utc::now();
        order.mark_executed(now);
        state.put_order(order.clone());

        let trade = self.journal.record(state, order, executed_price, now);

        self.apply_fill(state, order, executed_price);

        info!(
            order_id = %order.id,
            trade_id = %trade.id,
            price = %executed_price,
            "order executed"
        );
        Ok(())
    }

    fn apply_fill(&self, state: &mut StoreState, order: &Order, executed_price: Decimal) {
        match order.side {
            Side::Buy => match state.position(&order.owner, &order.symbol).cloned() {
                Some(mut position) => {
                    position.apply_buy(order.quantity, executed_price);
                    position.update_current_value(executed_price);
                    state.put_position(position);
                }
                None => {
                    state.put_position(Position::open(
                        order.owner.as_str(),
                        order.symbol.as_str(),
                        order.quantity,
                        executed_price,
                    ));
                }
            },
            Side::Sell => {
                // holdings sufficiency was checked under the same lock
                if let Some(mut position) = state.position(&order.owner, &order.symbol).cloned() {
                    position.apply_sell(order.quantity);
                    if position.is_closed() {
                        state.remove_position(&order.owner, &order.symbol);
                        info!(symbol = %order.symbol, owner = %order.owner, "position closed out");
                    } else {
                        position.update_current_value(executed_price);
                        state.put_position(position);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::types::{Instrument, InstrumentKind, OrderStatus};
    use desk_store::seed_defaults;
    use rust_decimal_macros::dec;

    const OWNER: &str = "user-a";

    fn engine() -> (Arc<MemStore>, OrderEngine) {
        let store = Arc::new(MemStore::new());
        seed_defaults(&store);
        store.write(|state| {
            state.insert_instrument(Instrument::new(
                "ACME",
                "NSE",
                InstrumentKind::Equity,
                dec!(100),
            ));
        });
        let journal = TradeJournal::new(store.clone());
        let engine = OrderEngine::new(store.clone(), journal);
        (store, engine)
    }

    #[test]
    fn test_market_buy_executes_and_opens_position() {
        let (store, engine) = engine();

        let order = engine
            .place_order(OWNER, OrderRequest::market("RELIANCE", Side::Buy, 10))
            .unwrap();

        assert_eq!(order.status, OrderStatus::Executed);
        assert!(order.executed_at.is_some());

        store.read(|s| {
            let position = s.position(OWNER, "RELIANCE").unwrap();
            assert_eq!(position.quantity, 10);
            assert_eq!(position.average_cost, dec!(2450.50));

            let trade = s.trade_for_order(order.id).unwrap();
            assert_eq!(trade.executed_price, dec!(2450.50));
            assert_eq!(trade.total_value, dec!(24505.00));
        });
    }

    #[test]
    fn test_sequential_buys_weight_the_average() {
        let (store, engine) = engine();

        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Buy, 10))
            .unwrap();
        store.update_price("ACME", dec!(110)).unwrap();
        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Buy, 5))
            .unwrap();

        store.read(|s| {
            let position = s.position(OWNER, "ACME").unwrap();
            assert_eq!(position.quantity, 15);
            assert_eq!(position.average_cost, dec!(103.33));
        });
    }

    #[test]
    fn test_sell_reduces_quantity_and_keeps_average() {
        let (store, engine) = engine();

        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Buy, 10))
            .unwrap();
        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Sell, 4))
            .unwrap();

        store.read(|s| {
            let position = s.position(OWNER, "ACME").unwrap();
            assert_eq!(position.quantity, 6);
            assert_eq!(position.average_cost, dec!(100));
        });
    }

    #[test]
    fn test_selling_everything_deletes_the_position() {
        let (store, engine) = engine();

        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Buy, 10))
            .unwrap();
        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Sell, 10))
            .unwrap();

        store.read(|s| {
            assert!(s.position(OWNER, "ACME").is_none());
            assert!(s.positions_for(OWNER).is_empty());
        });
    }

    #[test]
    fn test_oversell_fails_and_leaves_position_untouched() {
        let (store, engine) = engine();

        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Buy, 10))
            .unwrap();

        let err = engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Sell, 11))
            .unwrap_err();
        match err {
            DeskError::Order(OrderError::InsufficientHoldings {
                available,
                requested,
            }) => {
                assert_eq!(available, 10);
                assert_eq!(requested, 11);
            }
            other => panic!("unexpected error: {other}"),
        }

        store.read(|s| {
            assert_eq!(s.position(OWNER, "ACME").unwrap().quantity, 10);
            // only the buy order exists
            assert_eq!(s.orders_for(OWNER).len(), 1);
        });
    }

    #[test]
    fn test_sell_without_holdings_reports_zero_available() {
        let (_, engine) = engine();

        let err = engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Sell, 5))
            .unwrap_err();
        assert!(matches!(
            err,
            DeskError::Order(OrderError::InsufficientHoldings {
                available: 0,
                requested: 5,
            })
        ));
    }

    #[test]
    fn test_nonpositive_quantity_rejected_before_anything_else() {
        let (store, engine) = engine();

        for quantity in [0, -3] {
            let err = engine
                .place_order(OWNER, OrderRequest::market("UNLISTED", Side::Buy, quantity))
                .unwrap_err();
            assert!(matches!(err, DeskError::Order(OrderError::InvalidQuantity)));
        }

        store.read(|s| assert!(s.orders_for(OWNER).is_empty()));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let (store, engine) = engine();

        let err = engine
            .place_order(OWNER, OrderRequest::market("UNLISTED", Side::Buy, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            DeskError::Order(OrderError::UnknownInstrument(ref s)) if s == "UNLISTED"
        ));
        store.read(|s| assert!(s.orders_for(OWNER).is_empty()));
    }

    #[test]
    fn test_limit_order_requires_positive_price() {
        let (_, engine) = engine();

        let missing = OrderRequest {
            symbol: "ACME".to_string(),
            side: Side::Buy,
            style: OrderStyle::Limit,
            quantity: 5,
            limit_price: None,
        };
        let err = engine.place_order(OWNER, missing).unwrap_err();
        assert!(matches!(
            err,
            DeskError::Order(OrderError::MissingLimitPrice)
        ));

        let zero = OrderRequest::limit("ACME", Side::Buy, 5, dec!(0));
        let err = engine.place_order(OWNER, zero).unwrap_err();
        assert!(matches!(
            err,
            DeskError::Order(OrderError::MissingLimitPrice)
        ));
    }

    #[test]
    fn test_limit_order_rests_without_side_effects() {
        let (store, engine) = engine();

        let order = engine
            .place_order(OWNER, OrderRequest::limit("ACME", Side::Buy, 5, dec!(95)))
            .unwrap();

        assert_eq!(order.status, OrderStatus::Placed);
        assert!(order.executed_at.is_none());

        store.read(|s| {
            assert!(s.trade_for_order(order.id).is_none());
            assert!(s.position(OWNER, "ACME").is_none());
            assert_eq!(s.order(order.id).unwrap().status, OrderStatus::Placed);
        });
    }

    #[test]
    fn test_racing_sells_debit_only_once() {
        let (store, engine) = engine();
        let engine = Arc::new(engine);

        engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Buy, 10))
            .unwrap();

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || {
                    engine.place_order(OWNER, OrderRequest::market("ACME", Side::Sell, 10))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(succeeded, 1);
        assert!(results.iter().any(|r| matches!(
            r,
            Err(DeskError::Order(OrderError::InsufficientHoldings { .. }))
        )));

        store.read(|s| assert!(s.position(OWNER, "ACME").is_none()));
    }

    #[test]
    fn test_order_lookup() {
        let (_, engine) = engine();

        let placed = engine
            .place_order(OWNER, OrderRequest::market("ACME", Side::Buy, 2))
            .unwrap();

        assert_eq!(engine.get(placed.id).unwrap().id, placed.id);
        assert!(engine.get(Uuid::new_v4()).is_none());
        assert_eq!(engine.list(OWNER).len(), 1);
    }
}
