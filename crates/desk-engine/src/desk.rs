//! The desk facade wired over one store.

use std::sync::Arc;

use async_trait::async_trait;
use desk_core::error::DeskError;
use desk_core::traits::Desk;
use desk_core::types::{Instrument, Order, OrderRequest, Position, Trade};
use desk_store::MemStore;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::instruments::InstrumentService;
use crate::orders::OrderEngine;
use crate::portfolio::PortfolioService;
use crate::trades::TradeJournal;

/// One logical trading desk: the order engine plus its read paths,
/// sharing a single store.
pub struct TradingDesk {
    engine: OrderEngine,
    portfolio: PortfolioService,
    journal: TradeJournal,
    instruments: InstrumentService,
}

impl TradingDesk {
    pub fn new(store: Arc<MemStore>) -> Self {
        let journal = TradeJournal::new(store.clone());
        Self {
            engine: OrderEngine::new(store.clone(), journal.clone()),
            portfolio: PortfolioService::new(store.clone()),
            instruments: InstrumentService::new(store),
            journal,
        }
    }
}

#[async_trait]
impl Desk for TradingDesk {
    async fn place_order(&self, owner: &str, request: OrderRequest) -> Result<Order, DeskError> {
        self.engine.place_order(owner, request)
    }

    async fn order(&self, id: Uuid) -> Result<Option<Order>, DeskError> {
        Ok(self.engine.get(id))
    }

    async fn orders(&self, owner: &str) -> Result<Vec<Order>, DeskError> {
        Ok(self.engine.list(owner))
    }

    async fn portfolio(&self, owner: &str) -> Result<Vec<Position>, DeskError> {
        Ok(self.portfolio.holdings(owner))
    }

    async fn holding(&self, owner: &str, symbol: &str) -> Result<Option<Position>, DeskError> {
        Ok(self.portfolio.holding(owner, symbol))
    }

    async fn portfolio_value(&self, owner: &str) -> Result<Decimal, DeskError> {
        Ok(self.portfolio.total_value(owner))
    }

    async fn trades(&self, owner: &str) -> Result<Vec<Trade>, DeskError> {
        Ok(self.journal.list(owner))
    }

    async fn trade_for_order(&self, order_id: Uuid) -> Result<Option<Trade>, DeskError> {
        Ok(self.journal.for_order(order_id))
    }

    async fn instruments(&self) -> Result<Vec<Instrument>, DeskError> {
        Ok(self.instruments.list())
    }

    async fn instrument(&self, symbol: &str) -> Result<Option<Instrument>, DeskError> {
        Ok(self.instruments.get(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::types::{OrderStatus, Side};
    use desk_store::seed_defaults;
    use rust_decimal_macros::dec;

    const OWNER: &str = "user-a";

    fn desk() -> (Arc<MemStore>, TradingDesk) {
        let store = Arc::new(MemStore::new());
        seed_defaults(&store);
        (store.clone(), TradingDesk::new(store))
    }

    #[tokio::test]
    async fn test_round_trip_through_the_trait() {
        let (_, desk) = desk();

        let order = desk
            .place_order(OWNER, OrderRequest::market("TCS", Side::Buy, 2))
            .await
            .unwrap();

        assert_eq!(desk.order(order.id).await.unwrap().unwrap().id, order.id);
        assert_eq!(desk.orders(OWNER).await.unwrap().len(), 1);
        assert!(desk.trade_for_order(order.id).await.unwrap().is_some());
        assert_eq!(desk.instruments().await.unwrap().len(), 10);
        assert!(desk.instrument("TCS").await.unwrap().is_some());
        assert!(desk.instrument("UNLISTED").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_full_reliance_scenario() {
        let (store, desk) = desk();

        // buy 10 at the seeded 2450.50
        let first = desk
            .place_order(OWNER, OrderRequest::market("RELIANCE", Side::Buy, 10))
            .await
            .unwrap();
        assert_eq!(first.status, OrderStatus::Executed);

        let holding = desk.holding(OWNER, "RELIANCE").await.unwrap().unwrap();
        assert_eq!(holding.quantity, 10);
        assert_eq!(holding.average_cost, dec!(2450.50));

        // the feed moves the price, then buy 5 more
        store.update_price("RELIANCE", dec!(2500.00)).unwrap();
        let second = desk
            .place_order(OWNER, OrderRequest::market("RELIANCE", Side::Buy, 5))
            .await
            .unwrap();

        let holding = desk.holding(OWNER, "RELIANCE").await.unwrap().unwrap();
        assert_eq!(holding.quantity, 15);
        // (10 x 2450.50 + 5 x 2500.00) / 15 = 37005 / 15
        assert_eq!(holding.average_cost, dec!(2467.00));

        // close the whole thing out
        let third = desk
            .place_order(OWNER, OrderRequest::market("RELIANCE", Side::Sell, 15))
            .await
            .unwrap();

        assert!(desk.holding(OWNER, "RELIANCE").await.unwrap().is_none());
        assert!(desk.portfolio(OWNER).await.unwrap().is_empty());

        let trades = desk.trades(OWNER).await.unwrap();
        assert_eq!(trades.len(), 3);
        for (order, side) in [(&first, Side::Buy), (&second, Side::Buy), (&third, Side::Sell)] {
            let trade = desk.trade_for_order(order.id).await.unwrap().unwrap();
            assert_eq!(trade.side, side);
        }
    }

    #[tokio::test]
    async fn test_portfolio_value_tracks_the_feed() {
        let (store, desk) = desk();

        desk.place_order(OWNER, OrderRequest::market("ITC", Side::Buy, 100))
            .await
            .unwrap();
        assert_eq!(desk.portfolio_value(OWNER).await.unwrap(), dec!(42530.00));

        store.update_price("ITC", dec!(430.00)).unwrap();
        assert_eq!(desk.portfolio_value(OWNER).await.unwrap(), dec!(43000.00));
    }
}
