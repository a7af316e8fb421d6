//! Boundary validation for trade records.
//!
//! The ledger trusts its input. Everything loaded from outside goes through
//! these checks first.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::error::TradebookError;
use crate::domain::trade::TradeRecord;

pub fn validate_ticker(line: usize, raw: &str) -> Result<String, TradebookError> {
    let ticker = raw.trim();
    if ticker.is_empty() {
        return Err(TradebookError::invalid_trade(line, "ticker", "must not be empty"));
    }
    Ok(ticker.to_string())
}

pub fn validate_positive(line: usize, field: &str, value: f64) -> Result<f64, TradebookError> {
    if !value.is_finite() {
        return Err(TradebookError::invalid_trade(line, field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(TradebookError::invalid_trade(
            line,
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(value)
}

pub fn parse_number(line: usize, field: &str, raw: &str) -> Result<f64, TradebookError> {
    let value: f64 = raw.trim().parse().map_err(|e| {
        TradebookError::invalid_trade(line, field, format!("invalid number {:?}: {}", raw, e))
    })?;
    validate_positive(line, field, value)
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (UTC), or a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_trade_date(line: usize, raw: &str) -> Result<DateTime<Utc>, TradebookError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(TradebookError::invalid_trade(
        line,
        "date",
        format!("unrecognized date {:?} (expected YYYY-MM-DD or RFC 3339)", raw),
    ))
}

/// Checks in-memory records against the same rules the CSV loader applies.
/// `line` in errors is the 1-based index into `trades`.
pub fn validate_trades(trades: &[TradeRecord]) -> Result<(), TradebookError> {
    for (i, trade) in trades.iter().enumerate() {
        let line = i + 1;
        validate_ticker(line, &trade.ticker)?;
        validate_positive(line, "price", trade.price)?;
        validate_positive(line, "quantity", trade.quantity)?;
    }
    Ok(())
}
