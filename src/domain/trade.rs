//! Trade journal records.

use chrono::{DateTime, Utc};
use std::fmt;

/// Side of a journal entry.
///
/// Values the journal does not recognize are carried through as `Other`
/// so the ledger can skip them instead of failing the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeType {
    Buy,
    Sell,
    Other(String),
}

impl TradeType {
    /// Case-sensitive: only `Buy` and `Sell` are recognized.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Buy" => TradeType::Buy,
            "Sell" => TradeType::Sell,
            other => TradeType::Other(other.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TradeType::Other(_))
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeType::Buy => write!(f, "Buy"),
            TradeType::Sell => write!(f, "Sell"),
            TradeType::Other(raw) => write!(f, "{}", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub ticker: String,
    pub trade_type: TradeType,
    pub price: f64,
    pub quantity: f64,
    pub date: DateTime<Utc>,
}

impl TradeRecord {
    pub fn buy(ticker: &str, price: f64, quantity: f64, date: DateTime<Utc>) -> Self {
        Self {
            ticker: ticker.to_string(),
            trade_type: TradeType::Buy,
            price,
            quantity,
            date,
        }
    }

    pub fn sell(ticker: &str, price: f64, quantity: f64, date: DateTime<Utc>) -> Self {
        Self {
            ticker: ticker.to_string(),
            trade_type: TradeType::Sell,
            price,
            quantity,
            date,
        }
    }
}
