//! Configuration validation.
//!
//! Checks the optional keys tradebook understands before any trades are
//! loaded. Absent keys are fine; present ones must be usable.

use crate::domain::error::TradebookError;
use crate::ports::config_port::{parse_bool, ConfigPort};

pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), TradebookError> {
    validate_trades_path(config)?;
    validate_strict_types(config)?;
    validate_currency(config)?;
    validate_log_format(config)?;
    Ok(())
}

fn validate_trades_path(config: &dyn ConfigPort) -> Result<(), TradebookError> {
    match config.get_string("journal", "trades") {
        Some(s) if s.trim().is_empty() => Err(TradebookError::ConfigInvalid {
            section: "journal".to_string(),
            key: "trades".to_string(),
            reason: "trades path must not be blank".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_strict_types(config: &dyn ConfigPort) -> Result<(), TradebookError> {
    match config.get_string("journal", "strict_types") {
        Some(s) if parse_bool(&s).is_none() => Err(TradebookError::ConfigInvalid {
            section: "journal".to_string(),
            key: "strict_types".to_string(),
            reason: format!("expected a boolean, got {:?}", s),
        }),
        _ => Ok(()),
    }
}

fn validate_currency(config: &dyn ConfigPort) -> Result<(), TradebookError> {
    match config.get_string("report", "currency") {
        Some(s) if s.trim().is_empty() => Err(TradebookError::ConfigInvalid {
            section: "report".to_string(),
            key: "currency".to_string(),
            reason: "currency symbol must not be blank".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_log_format(config: &dyn ConfigPort) -> Result<(), TradebookError> {
    match config.get_string("logging", "format") {
        Some(s) if !LOG_FORMATS.contains(&s.trim().to_lowercase().as_str()) => {
            Err(TradebookError::ConfigInvalid {
                section: "logging".to_string(),
                key: "format".to_string(),
                reason: format!("format must be one of {}", LOG_FORMATS.join(", ")),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn valid_full_config_passes() {
        let config = make_config(
            r#"
[journal]
trades = data/trades.csv
strict_types = yes

[report]
currency = €

[logging]
level = debug
format = json
"#,
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_config_passes() {
        assert!(validate_config(&make_config("")).is_ok());
    }

    #[test]
    fn unknown_log_format_rejected() {
        let config = make_config("[logging]\nformat = xml\n");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, TradebookError::ConfigInvalid { key, .. } if key == "format"));
    }

    #[test]
    fn log_format_is_case_insensitive() {
        let config = make_config("[logging]\nformat = JSON\n");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn non_boolean_strict_types_rejected() {
        let config = make_config("[journal]\nstrict_types = maybe\n");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, TradebookError::ConfigInvalid { key, .. } if key == "strict_types"));
    }

    #[test]
    fn blank_trades_path_rejected() {
        let config = make_config("[journal]\ntrades =\n");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, TradebookError::ConfigInvalid { key, .. } if key == "trades"));
    }
}
