//! List orders command.

use anyhow::Result;
use desk_config::AppConfig;
use desk_core::traits::Desk;

pub async fn run(config: &AppConfig) -> Result<()> {
    let ctx = super::open(config)?;
    let owner = &config.desk.default_owner;
    let orders = ctx.desk.orders(owner).await?;

    if orders.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }

    println!(
        "{:<36} {:<12} {:<5} {:<7} {:>6} {:<10} {}",
        "ID", "SYMBOL", "SIDE", "STYLE", "QTY", "STATUS", "CREATED"
    );
    for order in &orders {
        println!(
            "{:<36} {:<12} {:<5} {:<7} {:>6} {:<10} {}",
            order.id.to_string(),
            order.symbol,
            order.side.to_string(),
            order.style.to_string(),
            order.quantity,
            order.status.to_string(),
            order.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }

    Ok(())
}
