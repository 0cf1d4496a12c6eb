//! Order execution and holdings tracking engine.
//!
//! Market orders execute synchronously at the instrument's last traded
//! price, inside one unit of work covering the status flip, the trade
//! record, and the position mutation. Limit orders are validated and
//! persisted as `Placed`, but nothing watches the market to fill them:
//! they rest indefinitely. That gap is inherited behavior and is kept
//! deliberately rather than papered over with matching logic.

mod desk;
mod instruments;
mod locks;
mod orders;
mod portfolio;
mod trades;

pub use desk::TradingDesk;
pub use instruments::InstrumentService;
pub use locks::SymbolLocks;
pub use orders::OrderEngine;
pub use portfolio::PortfolioService;
pub use trades::TradeJournal;
