//! List trades command.

use anyhow::Result;
use desk_config::AppConfig;
use desk_core::traits::Desk;

pub async fn run(config: &AppConfig) -> Result<()> {
    let ctx = super::open(config)?;
    let owner = &config.desk.default_owner;

    let trades = ctx.desk.trades(owner).await?;
    if trades.is_empty() {
        println!("No trades yet.");
        return Ok(());
    }

    println!(
        "{:<36} {:<12} {:<5} {:>6} {:>12} {:>14} {}",
        "ID", "SYMBOL", "SIDE", "QTY", "PRICE", "TOTAL", "EXECUTED"
    );
    for trade in &trades {
        println!(
            "{:<36} {:<12} {:<5} {:>6} {:>12} {:>14} {}",
            trade.id.to_string(),
            trade.symbol,
            trade.side.to_string(),
            trade.quantity,
            trade.executed_price.to_string(),
            trade.total_value.to_string(),
            trade.executed_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }

    Ok(())
}
