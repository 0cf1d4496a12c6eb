//! Portfolio read path.

use std::sync::Arc;

use desk_core::types::Position;
use desk_store::MemStore;
use rust_decimal::Decimal;

/// Read-side view over the position ledger.
///
/// Current values are recomputed against the latest instrument price on
/// every read; the stored rows keep only quantity and average cost as
/// authoritative.
pub struct PortfolioService {
    store: Arc<MemStore>,
}

impl PortfolioService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// An owner's holdings, ordered by symbol, values refreshed.
    pub fn holdings(&self, owner: &str) -> Vec<Position> {
        self.store.read(|s| {
            s.positions_for(owner)
                .into_iter()
                .map(|mut position| {
                    if let Some(instrument) = s.instrument(&position.symbol) {
                        position.update_current_value(instrument.last_traded_price);
                    }
                    position
                })
                .collect()
        })
    }

    /// One holding, value refreshed, if the owner has it.
    pub fn holding(&self, owner: &str, symbol: &str) -> Option<Position> {
        self.store.read(|s| {
            s.position(owner, symbol).cloned().map(|mut position| {
                if let Some(instrument) = s.instrument(symbol) {
                    position.update_current_value(instrument.last_traded_price);
                }
                position
            })
        })
    }

    /// Exact-decimal sum of every holding's current value.
    pub fn total_value(&self, owner: &str) -> Decimal {
        self.holdings(owner).iter().map(|p| p.current_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_store::seed_defaults;
    use rust_decimal_macros::dec;

    fn store_with_positions() -> Arc<MemStore> {
        let store = Arc::new(MemStore::new());
        seed_defaults(&store);
        store.write(|state| {
            state.put_position(Position::open("user-a", "RELIANCE", 10, dec!(2400.00)));
            state.put_position(Position::open("user-a", "TCS", 2, dec!(3500.00)));
        });
        store
    }

    #[test]
    fn test_holdings_refresh_current_value() {
        let store = store_with_positions();
        let service = PortfolioService::new(store.clone());

        // seeded RELIANCE trades at 2450.50, not the 2400.00 cost basis
        let holding = service.holding("user-a", "RELIANCE").unwrap();
        assert_eq!(holding.current_value, dec!(24505.00));
        assert_eq!(holding.average_cost, dec!(2400.00));

        store.update_price("RELIANCE", dec!(2600.00)).unwrap();
        let holding = service.holding("user-a", "RELIANCE").unwrap();
        assert_eq!(holding.current_value, dec!(26000.00));
    }

    #[test]
    fn test_total_value_sums_exactly() {
        let store = store_with_positions();
        let service = PortfolioService::new(store);

        // 10 x 2450.50 + 2 x 3520.75
        assert_eq!(service.total_value("user-a"), dec!(31546.50));
    }

    #[test]
    fn test_empty_portfolio_totals_zero() {
        let store = Arc::new(MemStore::new());
        let service = PortfolioService::new(store);

        assert!(service.holdings("user-a").is_empty());
        assert_eq!(service.total_value("user-a"), Decimal::ZERO);
    }

    #[test]
    fn test_holding_without_instrument_keeps_stored_value() {
        let store = Arc::new(MemStore::new());
        store.write(|state| {
            state.put_position(Position::open("user-a", "DELISTED", 3, dec!(50.00)));
        });
        let service = PortfolioService::new(store);

        let holding = service.holding("user-a", "DELISTED").unwrap();
        assert_eq!(holding.current_value, dec!(150.00));
    }
}
