//! Show order command.

use anyhow::Result;
use desk_config::AppConfig;
use desk_core::traits::Desk;

use crate::cli::OrderArgs;

pub async fn run(args: OrderArgs, config: &AppConfig) -> Result<()> {
    let ctx = super::open(config)?;

    let Some(order) = ctx.desk.order(args.id).await? else {
        println!("Order {} not found.", args.id);
        return Ok(());
    };

    println!("Order    {}", order.id);
    println!("Symbol   {}", order.symbol);
    println!("Side     {}", order.side);
    println!("Style    {}", order.style);
    println!("Quantity {}", order.quantity);
    if let Some(price) = order.limit_price {
        println!("Limit    {}", price);
    }
    println!("Status   {}", order.status);
    println!("Created  {}", order.created_at.format("%Y-%m-%d %H:%M:%S"));
    if let Some(executed_at) = order.executed_at {
        println!("Executed {}", executed_at.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(trade) = ctx.desk.trade_for_order(order.id).await? {
        println!();
        println!(
            "Trade {} — {} x {} at {} = {}",
            trade.id, trade.side, trade.quantity, trade.executed_price, trade.total_value
        );
    }

    Ok(())
}
