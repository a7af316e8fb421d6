//! Trade ledger replay.
//!
//! Trades are replayed in chronological order against per-ticker
//! weighted-average-cost positions. Every sell that matches a held position
//! yields a [`RealizedTrade`]; statistics and the equity curve are both folds
//! over that stream.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use tracing::debug;

use super::equity::{self, EquityPoint};
use super::metrics::PortfolioStats;
use super::position::Position;
use super::trade::{TradeRecord, TradeType};

/// Realized P/L produced by a single sell.
#[derive(Debug, Clone, PartialEq)]
pub struct RealizedTrade {
    pub ticker: String,
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub avg_cost: f64,
    pub pnl: f64,
}

impl RealizedTrade {
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Result of replaying a journal: realized sells plus the positions left open.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    pub realized: Vec<RealizedTrade>,
    pub positions: HashMap<String, Position>,
}

impl Replay {
    /// Tickers still holding units, sorted.
    pub fn open_tickers(&self) -> Vec<&str> {
        let mut open: Vec<&str> = self
            .positions
            .iter()
            .filter(|(_, pos)| !pos.is_flat())
            .map(|(ticker, _)| ticker.as_str())
            .collect();
        open.sort_unstable();
        open
    }
}

/// Replays `trades` oldest first. Trades sharing a timestamp keep their
/// input order.
pub fn replay(trades: &[TradeRecord]) -> Replay {
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut result = Replay::default();

    for trade in sorted {
        match &trade.trade_type {
            TradeType::Buy => {
                result
                    .positions
                    .entry(trade.ticker.clone())
                    .or_default()
                    .buy(trade.price, trade.quantity);
            }
            TradeType::Sell => {
                let position = result.positions.entry(trade.ticker.clone()).or_default();
                let avg_cost = position.avg_cost;
                let held = position.quantity;
                match position.sell(trade.price, trade.quantity) {
                    Some(pnl) => result.realized.push(RealizedTrade {
                        ticker: trade.ticker.clone(),
                        date: trade.date,
                        quantity: trade.quantity.min(held),
                        avg_cost,
                        pnl,
                    }),
                    None => debug!(
                        ticker = %trade.ticker,
                        date = %trade.date,
                        "ignoring sell with no units held"
                    ),
                }
            }
            TradeType::Other(raw) => {
                debug!(ticker = %trade.ticker, trade_type = %raw, "skipping unrecognized trade type");
            }
        }
    }

    result
}

/// Aggregate statistics over every realized sell in `trades`.
pub fn calculate_portfolio_stats(trades: &[TradeRecord]) -> PortfolioStats {
    PortfolioStats::compute(&replay(trades).realized)
}

/// Cumulative realized P/L per calendar day with a realized sell.
pub fn calculate_equity_curve(trades: &[TradeRecord]) -> Vec<EquityPoint> {
    equity::equity_curve(&replay(trades).realized)
}
