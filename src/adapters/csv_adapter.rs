//! CSV trade journal adapter.
//!
//! Expects a header row naming `ticker`, `type`, `price`, `quantity` and
//! `date` in any order. Extra columns are ignored.

use crate::domain::error::TradebookError;
use crate::domain::trade::{TradeRecord, TradeType};
use crate::domain::trade_validation::{parse_number, parse_trade_date, validate_ticker};
use crate::ports::trade_port::TradeSource;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct RawTrade {
    ticker: String,
    #[serde(rename = "type")]
    trade_type: String,
    price: String,
    quantity: String,
    date: String,
}

pub struct CsvTradeAdapter {
    path: PathBuf,
    strict_types: bool,
}

impl CsvTradeAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            strict_types: false,
        }
    }

    /// Reject rows whose type is neither `Buy` nor `Sell`.
    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }
}

impl TradeSource for CsvTradeAdapter {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, TradebookError> {
        let file = File::open(&self.path).map_err(|e| TradebookError::TradeFile {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let trades = parse_trades(file, self.strict_types)?;
        info!(
            path = %self.path.display(),
            count = trades.len(),
            "loaded trade journal"
        );
        Ok(trades)
    }
}

/// Parses and validates a trade CSV. Line numbers in errors are file lines,
/// with the header on line 1.
pub fn parse_trades<R: io::Read>(
    reader: R,
    strict_types: bool,
) -> Result<Vec<TradeRecord>, TradebookError> {
    // Flexible so short rows surface as a missing field rather than a csv length error.
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut trades = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 2);

        let raw: RawTrade = record.deserialize(Some(&headers)).map_err(|e| {
            TradebookError::invalid_trade(line, "row", e.to_string())
        })?;

        let ticker = validate_ticker(line, &raw.ticker)?;
        let trade_type = TradeType::parse(&raw.trade_type);
        if !trade_type.is_recognized() {
            if strict_types {
                return Err(TradebookError::invalid_trade(
                    line,
                    "type",
                    format!("expected Buy or Sell, got {:?}", raw.trade_type),
                ));
            }
            warn!(line, trade_type = %raw.trade_type, "unrecognized trade type will be ignored");
        }
        let price = parse_number(line, "price", &raw.price)?;
        let quantity = parse_number(line, "quantity", &raw.quantity)?;
        let date = parse_trade_date(line, &raw.date)?;

        trades.push(TradeRecord {
            ticker,
            trade_type,
            price,
            quantity,
            date,
        });
    }

    Ok(trades)
}
