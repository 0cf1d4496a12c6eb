//! Order types and structures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStyle {
    /// Execute immediately at the instrument's last traded price
    Market,
    /// Rest at the given price; nothing in the current scope fills it
    Limit,
}

impl std::fmt::Display for OrderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStyle::Market => write!(f, "MARKET"),
            OrderStyle::Limit => write!(f, "LIMIT"),
        }
    }
}

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, exists only during placement
    New,
    /// Limit order resting, awaiting a fill that nothing currently triggers
    Placed,
    /// Market order filled
    Executed,
    /// Reserved. No code path produces this status today
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::Placed => write!(f, "PLACED"),
            OrderStatus::Executed => write!(f, "EXECUTED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl OrderStatus {
    /// Check if the order has reached a state with no outgoing transition.
    ///
    /// `Placed` counts as terminal: resting limit orders are never watched
    /// or triggered in the current scope.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Placed | OrderStatus::Executed | OrderStatus::Cancelled
        )
    }
}

/// Order request for submitting new orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Symbol to trade
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Market or limit
    pub style: OrderStyle,
    /// Number of shares
    pub quantity: i64,
    /// Limit price (required for limit orders, ignored otherwise)
    pub limit_price: Option<Decimal>,
}

impl OrderRequest {
    /// Create a market order request.
    pub fn market(symbol: impl Into<String>, side: Side, quantity: i64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            style: OrderStyle::Market,
            quantity,
            limit_price: None,
        }
    }

    /// Create a limit order request.
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: i64, limit_price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            style: OrderStyle::Limit,
            quantity,
            limit_price: Some(limit_price),
        }
    }
}

/// A validated order owned by one tenant.
///
/// Symbol, side, style, and quantity are fixed at creation; only the
/// status and execution timestamp mutate, exactly once, at execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID
    pub id: Uuid,
    /// Symbol traded
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Market or limit
    pub style: OrderStyle,
    /// Number of shares requested
    pub quantity: i64,
    /// Limit price, present for limit orders
    pub limit_price: Option<Decimal>,
    /// Current status
    pub status: OrderStatus,
    /// When the order was created
    pub created_at: DateTime<Utc>,
    /// When the order was executed
    pub executed_at: Option<DateTime<Utc>>,
    /// Owning tenant
    pub owner: String,
}

impl Order {
    /// Create a new order from a request for the given owner.
    pub fn from_request(owner: impl Into<String>, request: &OrderRequest) -> Self {
        let limit_price = match request.style {
            OrderStyle::Limit => request.limit_price,
            OrderStyle::Market => None,
        };
        Self {
            id: Uuid::new_v4(),
            symbol: request.symbol.clone(),
            side: request.side,
            style: request.style,
            quantity: request.quantity,
            limit_price,
            status: OrderStatus::New,
            created_at: Utc::now(),
            executed_at: None,
            owner: owner.into(),
        }
    }

    /// Transition a resting limit order to `Placed`.
    pub fn mark_placed(&mut self) {
        self.status = OrderStatus::Placed;
    }

    /// Transition the order to `Executed` at the given instant.
    pub fn mark_executed(&mut self, at: DateTime<Utc>) {
        self.status = OrderStatus::Executed;
        self.executed_at = Some(at);
    }

    /// Check if the order has been executed.
    pub fn is_executed(&self) -> bool {
        self.status == OrderStatus::Executed
    }
}
