#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::io::Write;
pub use tradebook::domain::trade::{TradeRecord, TradeType};

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn buy(ticker: &str, price: f64, quantity: f64, date: DateTime<Utc>) -> TradeRecord {
    TradeRecord::buy(ticker, price, quantity, date)
}

pub fn sell(ticker: &str, price: f64, quantity: f64, date: DateTime<Utc>) -> TradeRecord {
    TradeRecord::sell(ticker, price, quantity, date)
}

/// The four-trade AAPL journal: realized 100 on 01-05 and 250 on 01-15.
pub fn aapl_journal() -> Vec<TradeRecord> {
    vec![
        buy("AAPL", 100.0, 10.0, at(2024, 1, 1)),
        sell("AAPL", 120.0, 5.0, at(2024, 1, 5)),
        buy("AAPL", 110.0, 5.0, at(2024, 1, 10)),
        sell("AAPL", 130.0, 10.0, at(2024, 1, 15)),
    ]
}

pub const AAPL_CSV: &str = "ticker,type,price,quantity,date\n\
    AAPL,Buy,100,10,2024-01-01\n\
    AAPL,Sell,120,5,2024-01-05\n\
    AAPL,Buy,110,5,2024-01-10\n\
    AAPL,Sell,130,10,2024-01-15\n";

/// One trade per hour starting at 2024-01-01, so every timestamp is distinct.
pub fn hourly(start_index: i64) -> DateTime<Utc> {
    at(2024, 1, 1) + Duration::hours(start_index)
}

pub fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
