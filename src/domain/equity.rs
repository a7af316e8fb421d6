//! Equity curve of cumulative realized P/L.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::ledger::RealizedTrade;

#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub date: NaiveDate,
    /// Cumulative realized P/L through `date`, rounded to cents.
    pub value: f64,
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sums realized P/L per calendar day.
pub fn daily_pnl(realized: &[RealizedTrade]) -> BTreeMap<NaiveDate, f64> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for trade in realized {
        *daily.entry(trade.day()).or_insert(0.0) += trade.pnl;
    }
    daily
}

/// One point per day with a realized sell; days without one are omitted.
/// The running total is kept unrounded and only each emitted value is rounded.
pub fn equity_curve(realized: &[RealizedTrade]) -> Vec<EquityPoint> {
    let mut running_total = 0.0_f64;
    daily_pnl(realized)
        .into_iter()
        .map(|(date, delta)| {
            running_total += delta;
            EquityPoint {
                date,
                value: round_cents(running_total),
            }
        })
        .collect()
}
