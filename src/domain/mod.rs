//! Core domain types and trade accounting.

pub mod trade;
pub mod position;
pub mod ledger;
pub mod metrics;
pub mod equity;
pub mod format;
pub mod report;
pub mod trade_validation;
pub mod config_validation;
pub mod error;
