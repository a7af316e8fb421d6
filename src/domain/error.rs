//! Domain error types.

/// Top-level error type for tradebook.
#[derive(Debug, thiserror::Error)]
pub enum TradebookError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to read trades from {path}: {reason}")]
    TradeFile { path: String, reason: String },

    #[error("invalid trade on line {line}, field {field}: {reason}")]
    InvalidTrade {
        line: usize,
        field: String,
        reason: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TradebookError {
    pub(crate) fn invalid_trade(line: usize, field: &str, reason: impl Into<String>) -> Self {
        TradebookError::InvalidTrade {
            line,
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&TradebookError> for std::process::ExitCode {
    fn from(err: &TradebookError) -> Self {
        let code: u8 = match err {
            TradebookError::Io(_) => 1,
            TradebookError::ConfigParse { .. }
            | TradebookError::ConfigMissing { .. }
            | TradebookError::ConfigInvalid { .. } => 2,
            TradebookError::TradeFile { .. }
            | TradebookError::InvalidTrade { .. }
            | TradebookError::Csv(_) => 3,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_trade_message_names_line_and_field() {
        let err = TradebookError::invalid_trade(4, "price", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid trade on line 4, field price: must be positive"
        );
    }

    #[test]
    fn config_missing_message() {
        let err = TradebookError::ConfigMissing {
            section: "journal".into(),
            key: "trades".into(),
        };
        assert_eq!(err.to_string(), "missing config key [journal] trades");
    }

    #[test]
    fn exit_codes_group_by_category() {
        use std::process::ExitCode;

        let io = TradebookError::Io(std::io::Error::other("boom"));
        let config = TradebookError::ConfigInvalid {
            section: "logging".into(),
            key: "format".into(),
            reason: "bad".into(),
        };
        let data = TradebookError::invalid_trade(1, "ticker", "empty");

        assert_eq!(ExitCode::from(&io), ExitCode::from(1));
        assert_eq!(ExitCode::from(&config), ExitCode::from(2));
        assert_eq!(ExitCode::from(&data), ExitCode::from(3));
    }
}
