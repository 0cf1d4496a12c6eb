//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use desk_core::types::{OrderStyle, Side};
use rust_decimal::Decimal;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "desk")]
#[command(author, version, about = "Order execution for a simulated equities trading desk")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tradable instruments
    Instruments,
    /// Place an order (market orders fill immediately)
    Place(PlaceArgs),
    /// List all orders
    Orders,
    /// Show one order and its trade
    Order(OrderArgs),
    /// Show holdings with current values
    Portfolio,
    /// List executed trades
    Trades,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Side::Buy,
            SideArg::Sell => Side::Sell,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Market,
    Limit,
}

impl From<StyleArg> for OrderStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Market => OrderStyle::Market,
            StyleArg::Limit => OrderStyle::Limit,
        }
    }
}

#[derive(clap::Args)]
pub struct PlaceArgs {
    /// Symbol to trade
    pub symbol: String,

    /// Buy or sell
    #[arg(short, long)]
    pub side: SideArg,

    /// Number of shares
    #[arg(short, long)]
    pub quantity: i64,

    /// Market or limit
    #[arg(long, default_value = "market")]
    pub style: StyleArg,

    /// Limit price (required for limit style)
    #[arg(long)]
    pub limit_price: Option<Decimal>,
}

#[derive(clap::Args)]
pub struct OrderArgs {
    /// Order ID
    pub id: Uuid,
}
