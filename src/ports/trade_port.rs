//! Trade journal source port trait.

use crate::domain::error::TradebookError;
use crate::domain::trade::TradeRecord;

pub trait TradeSource {
    /// Loads every record in the journal, validated, in file order.
    fn load_trades(&self) -> Result<Vec<TradeRecord>, TradebookError>;
}
