//! Position ledger entries.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// One owner's holding in a single symbol.
///
/// Quantity stays >= 0; a position that reaches exactly zero is deleted
/// from the ledger, never retained as a zero row. The average cost is the
/// weighted average of all buy fills behind the currently-held shares and
/// is untouched by sells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Owning tenant
    pub owner: String,
    /// Symbol held, unique per owner
    pub symbol: String,
    /// Shares held
    pub quantity: i64,
    /// Weighted-average buy price, 2 decimal places
    pub average_cost: Decimal,
    /// quantity x latest price; refreshed on read, not authoritative
    pub current_value: Decimal,
}

impl Position {
    /// Open a position with the first buy fill for a symbol.
    pub fn open(
        owner: impl Into<String>,
        symbol: impl Into<String>,
        quantity: i64,
        fill_price: Decimal,
    ) -> Self {
        Self {
            owner: owner.into(),
            symbol: symbol.into(),
            quantity,
            average_cost: fill_price,
            current_value: fill_price * Decimal::from(quantity),
        }
    }

    /// Apply a buy fill, recalculating the weighted-average cost.
    ///
    /// `(old_qty * old_avg + qty * price) / (old_qty + qty)`, rounded to
    /// 2 decimal places, half-up. The rounding mode is load-bearing: it
    /// feeds displayed P&L.
    pub fn apply_buy(&mut self, quantity: i64, fill_price: Decimal) {
        let old_value = self.average_cost * Decimal::from(self.quantity);
        let new_value = fill_price * Decimal::from(quantity);

        self.quantity += quantity;
        self.average_cost = ((old_value + new_value) / Decimal::from(self.quantity))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    }

    /// Apply a sell fill. The average cost stays as it was.
    ///
    /// The caller has already validated sufficiency; this does not
    /// re-check and must not be handed a quantity above the holding.
    pub fn apply_sell(&mut self, quantity: i64) {
        self.quantity -= quantity;
    }

    /// Check if every share has been sold.
    pub fn is_closed(&self) -> bool {
        self.quantity == 0
    }

    /// Refresh the market value from the latest instrument price.
    pub fn update_current_value(&mut self, latest_price: Decimal) {
        self.current_value = latest_price * Decimal::from(self.quantity);
    }
}
