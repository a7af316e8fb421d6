//! Portfolio performance statistics.

use super::ledger::RealizedTrade;

/// Reported profit factor when there are gains but no losses.
pub const PROFIT_FACTOR_SENTINEL: f64 = 999.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioStats {
    pub total_profit_loss: f64,
    /// Winning plus losing sells. Break-even sells are not counted.
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    /// Percentage, 0-100.
    pub win_rate: f64,
    pub profit_factor: f64,
    pub average_pl: f64,
}

impl PortfolioStats {
    pub fn compute(realized: &[RealizedTrade]) -> Self {
        let mut total_profit_loss = 0.0_f64;
        let mut gross_profit = 0.0_f64;
        let mut gross_loss = 0.0_f64;
        let mut winning_trades = 0usize;
        let mut losing_trades = 0usize;

        for trade in realized {
            let pnl = trade.pnl;
            total_profit_loss += pnl;
            if pnl > 0.0 {
                winning_trades += 1;
                gross_profit += pnl;
            } else if pnl < 0.0 {
                losing_trades += 1;
                gross_loss += pnl.abs();
            }
        }

        let total_trades = winning_trades + losing_trades;

        let win_rate = if total_trades > 0 {
            winning_trades as f64 / total_trades as f64 * 100.0
        } else {
            0.0
        };

        let profit_factor = if gross_loss > 0.0 {
            gross_profit / gross_loss
        } else if gross_profit > 0.0 {
            PROFIT_FACTOR_SENTINEL
        } else {
            0.0
        };

        let average_pl = if total_trades > 0 {
            total_profit_loss / total_trades as f64
        } else {
            0.0
        };

        PortfolioStats {
            total_profit_loss,
            total_trades,
            winning_trades,
            losing_trades,
            win_rate,
            profit_factor,
            average_pl,
        }
    }

    pub fn has_sentinel_profit_factor(&self) -> bool {
        self.profit_factor == PROFIT_FACTOR_SENTINEL && self.losing_trades == 0
    }
}
