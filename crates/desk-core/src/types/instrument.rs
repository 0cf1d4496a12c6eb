//! Instrument reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    #[serde(alias = "EQUITY")]
    Equity,
    #[serde(alias = "DERIVATIVE")]
    Derivative,
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstrumentKind::Equity => write!(f, "EQUITY"),
            InstrumentKind::Derivative => write!(f, "DERIVATIVE"),
        }
    }
}

/// A tradable symbol with its reference price data.
///
/// Reference data is immutable from the engine's perspective. The last
/// traded price is refreshed out-of-band by the price feed; the engine
/// only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique, non-empty symbol, e.g. "RELIANCE"
    pub symbol: String,
    /// Listing exchange, e.g. "NSE"
    pub exchange: String,
    /// Instrument kind
    pub kind: InstrumentKind,
    /// Latest traded price, used as the execution price for market orders
    pub last_traded_price: Decimal,
}

impl Instrument {
    /// Create a new instrument.
    pub fn new(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        kind: InstrumentKind,
        last_traded_price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            kind,
            last_traded_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_instrument_new() {
        let instrument = Instrument::new("RELIANCE", "NSE", InstrumentKind::Equity, dec!(2450.50));
        assert_eq!(instrument.symbol, "RELIANCE");
        assert_eq!(instrument.exchange, "NSE");
        assert_eq!(instrument.last_traded_price, dec!(2450.50));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(InstrumentKind::Equity.to_string(), "EQUITY");
        assert_eq!(InstrumentKind::Derivative.to_string(), "DERIVATIVE");
    }
}
