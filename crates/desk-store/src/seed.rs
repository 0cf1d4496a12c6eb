//! Reference-data seeding.

use std::path::Path;

use csv::ReaderBuilder;
use desk_core::error::StoreError;
use desk_core::types::{Instrument, InstrumentKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use tracing::info;

use crate::mem::MemStore;

/// CSV record format: `symbol,exchange,kind,last_traded_price`.
#[derive(Debug, Deserialize)]
struct CsvInstrument {
    #[serde(alias = "Symbol")]
    symbol: String,
    #[serde(alias = "Exchange")]
    exchange: String,
    #[serde(alias = "Kind", alias = "type", alias = "Type")]
    kind: InstrumentKind,
    #[serde(alias = "price", alias = "ltp")]
    last_traded_price: Decimal,
}

fn default_instruments() -> Vec<Instrument> {
    let equity = |symbol: &str, price: Decimal| {
        Instrument::new(symbol, "NSE", InstrumentKind::Equity, price)
    };
    vec![
        equity("RELIANCE", dec!(2450.50)),
        equity("TCS", dec!(3520.75)),
        equity("INFY", dec!(1450.25)),
        equity("HDFCBANK", dec!(1625.00)),
        equity("ICICIBANK", dec!(975.50)),
        equity("WIPRO", dec!(420.80)),
        equity("BHARTIARTL", dec!(850.60)),
        equity("ITC", dec!(425.30)),
        equity("SBIN", dec!(580.45)),
        equity("BAJFINANCE", dec!(6850.00)),
    ]
}

/// Seed the built-in sample instruments into an empty directory.
///
/// Skipped when any instruments already exist. Returns how many were
/// inserted.
pub fn seed_defaults(store: &MemStore) -> usize {
    store.write(|state| {
        if state.instrument_count() > 0 {
            return 0;
        }
        let defaults = default_instruments();
        let count = defaults.len();
        for instrument in defaults {
            state.insert_instrument(instrument);
        }
        info!(count, "seeded sample instruments");
        count
    })
}

/// Load instruments from a CSV file into the directory.
///
/// Rows overwrite existing symbols. A malformed row fails the whole load
/// and leaves the directory untouched.
pub fn load_instruments_csv(store: &MemStore, path: &Path) -> Result<usize, StoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| StoreError::Parse(e.to_string()))?;

    let mut instruments = Vec::new();
    for result in reader.deserialize() {
        let record: CsvInstrument = result.map_err(|e| StoreError::Parse(e.to_string()))?;
        if record.symbol.is_empty() {
            return Err(StoreError::Parse("instrument symbol is empty".to_string()));
        }
        instruments.push(Instrument::new(
            record.symbol,
            record.exchange,
            record.kind,
            record.last_traded_price,
        ));
    }

    let count = instruments.len();
    store.write(|state| {
        for instrument in instruments {
            state.insert_instrument(instrument);
        }
    });
    info!(count, path = %path.display(), "loaded instruments from csv");
    Ok(count)
}
