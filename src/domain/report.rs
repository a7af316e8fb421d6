//! Plain-text and CSV renderings of ledger results.

use std::io;

use super::equity::EquityPoint;
use super::error::TradebookError;
use super::format::format_currency;
use super::metrics::PortfolioStats;

pub fn render_stats(stats: &PortfolioStats, currency: &str) -> String {
    let profit_factor = if stats.has_sentinel_profit_factor() {
        format!("{:.2} (no losing trades)", stats.profit_factor)
    } else {
        format!("{:.2}", stats.profit_factor)
    };
    let lines = [
        format!(
            "Total P/L:        {}",
            format_currency(stats.total_profit_loss, currency)
        ),
        format!("Total Trades:     {}", stats.total_trades),
        format!("Winning Trades:   {}", stats.winning_trades),
        format!("Losing Trades:    {}", stats.losing_trades),
        format!("Win Rate:         {:.1}%", stats.win_rate),
        format!("Profit Factor:    {profit_factor}"),
        format!(
            "Average P/L:      {}",
            format_currency(stats.average_pl, currency)
        ),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes `date,value` rows with ISO dates and 2-decimal values.
pub fn write_equity_csv<W: io::Write>(
    points: &[EquityPoint],
    writer: W,
) -> Result<(), TradebookError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "value"])?;
    for point in points {
        wtr.write_record([
            point.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", point.value),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
