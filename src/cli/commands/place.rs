//! Place order command.

use anyhow::Result;
use desk_config::AppConfig;
use desk_core::traits::Desk;
use desk_core::types::{OrderRequest, OrderStatus};
use tracing::info;

use crate::cli::PlaceArgs;

pub async fn run(args: PlaceArgs, config: &AppConfig) -> Result<()> {
    let ctx = super::open(config)?;
    let owner = &config.desk.default_owner;

    let request = OrderRequest {
        symbol: args.symbol.to_uppercase(),
        side: args.side.into(),
        style: args.style.into(),
        quantity: args.quantity,
        limit_price: args.limit_price,
    };

    let order = ctx.desk.place_order(owner, request).await?;
    ctx.persist(config)?;
    info!(order_id = %order.id, status = %order.status, "order accepted");

    println!(
        "Order {} — {} {} {} x {} [{}]",
        order.id, order.style, order.side, order.symbol, order.quantity, order.status
    );

    match order.status {
        OrderStatus::Executed => {
            if let Some(trade) = ctx.desk.trade_for_order(order.id).await? {
                println!(
                    "Filled at {} — total value {}",
                    trade.executed_price, trade.total_value
                );
            }
        }
        OrderStatus::Placed => {
            println!("Resting as a limit order; no automatic fill will occur.");
        }
        _ => {}
    }

    Ok(())
}
