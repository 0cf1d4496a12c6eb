//! List instruments command.

use anyhow::Result;
use desk_config::AppConfig;
use desk_core::traits::Desk;

pub async fn run(config: &AppConfig) -> Result<()> {
    let ctx = super::open(config)?;
    let instruments = ctx.desk.instruments().await?;

    println!(
        "{:<12} {:<6} {:<12} {:>12}",
        "SYMBOL", "EXCH", "KIND", "LTP"
    );
    println!("──────────────────────────────────────────────");
    for instrument in &instruments {
        println!(
            "{:<12} {:<6} {:<12} {:>12}",
            instrument.symbol,
            instrument.exchange,
            instrument.kind.to_string(),
            instrument.last_traded_price.to_string(),
        );
    }
    println!();
    println!("{} instruments", instruments.len());

    Ok(())
}
