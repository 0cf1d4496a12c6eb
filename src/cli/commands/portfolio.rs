//! Show portfolio command.

use anyhow::Result;
use desk_config::AppConfig;
use desk_core::traits::Desk;

pub async fn run(config: &AppConfig) -> Result<()> {
    let ctx = super::open(config)?;
    let owner = &config.desk.default_owner;

    let holdings = ctx.desk.portfolio(owner).await?;
    if holdings.is_empty() {
        println!("No holdings.");
        return Ok(());
    }

    println!(
        "{:<12} {:>8} {:>12} {:>14}",
        "SYMBOL", "QTY", "AVG COST", "CURRENT VALUE"
    );
    println!("────────────────────────────────────────────────");
    for position in &holdings {
        println!(
            "{:<12} {:>8} {:>12} {:>14}",
            position.symbol,
            position.quantity,
            position.average_cost.to_string(),
            position.current_value.to_string(),
        );
    }

    let total = ctx.desk.portfolio_value(owner).await?;
    println!("────────────────────────────────────────────────");
    println!("{:<12} {:>37}", "TOTAL", total.to_string());

    Ok(())
}
