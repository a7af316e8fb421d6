//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvTradeAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::logging::LoggingConfig;
use crate::domain::config_validation::validate_config;
use crate::domain::error::TradebookError;
use crate::domain::ledger::{self, calculate_equity_curve, calculate_portfolio_stats};
use crate::domain::report::{render_stats, write_equity_csv};
use crate::domain::trade::TradeRecord;
use crate::ports::config_port::ConfigPort;
use crate::ports::trade_port::TradeSource;

pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Parser, Debug)]
#[command(name = "tradebook", about = "Trade journal P/L and equity curve calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print realized P/L statistics
    Stats {
        #[arg(short, long)]
        trades: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the cumulative realized P/L curve as CSV
    Equity {
        #[arg(short, long)]
        trades: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load and validate a trade journal
    Validate {
        #[arg(short, long)]
        trades: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Stats { trades, config } => run_stats(trades.as_ref(), config.as_ref()),
        Command::Equity {
            trades,
            config,
            output,
        } => run_equity(trades.as_ref(), config.as_ref(), output.as_ref()),
        Command::Validate { trades, config } => run_validate(trades.as_ref(), config.as_ref()),
    }
}

/// Loads and validates the config, or an empty one when no path is given.
pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, TradebookError> {
    let adapter = match path {
        Some(path) => FileConfigAdapter::from_file(path).map_err(|e| {
            TradebookError::ConfigParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            }
        })?,
        None => FileConfigAdapter::empty(),
    };
    validate_config(&adapter)?;
    Ok(adapter)
}

/// The `--trades` flag wins over `[journal] trades`.
pub fn resolve_trades_path(
    flag: Option<&PathBuf>,
    config: &dyn ConfigPort,
) -> Result<PathBuf, TradebookError> {
    if let Some(path) = flag {
        return Ok(path.clone());
    }
    config
        .get_string("journal", "trades")
        .map(|s| PathBuf::from(s.trim()))
        .ok_or_else(|| TradebookError::ConfigMissing {
            section: "journal".into(),
            key: "trades".into(),
        })
}

pub fn build_trade_source(path: &Path, config: &dyn ConfigPort) -> CsvTradeAdapter {
    CsvTradeAdapter::new(path.to_path_buf())
        .with_strict_types(config.get_bool("journal", "strict_types", false))
}

pub fn resolve_currency(config: &dyn ConfigPort) -> String {
    config
        .get_string("report", "currency")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Config, logging and trade loading shared by every subcommand.
pub fn prepare(
    trades_flag: Option<&PathBuf>,
    config_path: Option<&PathBuf>,
) -> Result<(FileConfigAdapter, Vec<TradeRecord>), TradebookError> {
    let config = load_config(config_path)?;
    LoggingConfig::from_config(&config).init();

    let trades_path = resolve_trades_path(trades_flag, &config)?;
    eprintln!("Loading trades from {}", trades_path.display());
    let trades = build_trade_source(&trades_path, &config).load_trades()?;
    Ok((config, trades))
}

fn fail(err: &TradebookError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

fn run_stats(trades_flag: Option<&PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let (config, trades) = match prepare(trades_flag, config_path) {
        Ok(loaded) => loaded,
        Err(e) => return fail(&e),
    };

    let stats = calculate_portfolio_stats(&trades);
    print!("{}", render_stats(&stats, &resolve_currency(&config)));
    ExitCode::SUCCESS
}

fn run_equity(
    trades_flag: Option<&PathBuf>,
    config_path: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    let (_config, trades) = match prepare(trades_flag, config_path) {
        Ok(loaded) => loaded,
        Err(e) => return fail(&e),
    };

    let curve = calculate_equity_curve(&trades);

    let result = match output_path {
        Some(path) => File::create(path)
            .map_err(TradebookError::from)
            .and_then(|file| write_equity_csv(&curve, file)),
        None => write_equity_csv(&curve, io::stdout().lock()),
    };

    match result {
        Ok(()) => {
            if let Some(path) = output_path {
                eprintln!("Equity curve ({} points) written to: {}", curve.len(), path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_validate(trades_flag: Option<&PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    let (_config, trades) = match prepare(trades_flag, config_path) {
        Ok(loaded) => loaded,
        Err(e) => return fail(&e),
    };

    let summary = summarize(&trades);
    match write_summary(&mut io::stdout().lock(), trades.len(), &summary) {
        Ok(()) => {
            eprintln!("Trade journal is valid.");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&TradebookError::from(e)),
    }
}

fn write_summary<W: Write>(out: &mut W, count: usize, summary: &JournalSummary) -> io::Result<()> {
    writeln!(out, "{} trades across {} tickers", count, summary.tickers)?;
    if summary.ignored_types > 0 {
        writeln!(out, "{} trades with unrecognized type", summary.ignored_types)?;
    }
    if !summary.open_tickers.is_empty() {
        writeln!(out, "open positions: {}", summary.open_tickers.join(", "))?;
    }
    Ok(())
}

/// Counts reported by `validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalSummary {
    pub tickers: usize,
    pub ignored_types: usize,
    pub open_tickers: Vec<String>,
}

pub fn summarize(trades: &[TradeRecord]) -> JournalSummary {
    let mut tickers: Vec<&str> = trades.iter().map(|t| t.ticker.as_str()).collect();
    tickers.sort_unstable();
    tickers.dedup();

    let replay = ledger::replay(trades);

    JournalSummary {
        tickers: tickers.len(),
        ignored_types: trades
            .iter()
            .filter(|t| !t.trade_type.is_recognized())
            .count(),
        open_tickers: replay
            .open_tickers()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
