//! Logging configuration and initialization.

use crate::ports::config_port::ConfigPort;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration from the `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let defaults = Self::default();
        Self {
            level: config
                .get_string("logging", "level")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.level),
            format: config
                .get_string("logging", "format")
                .map(|s| s.trim().to_lowercase())
                .unwrap_or(defaults.format),
        }
    }

    /// Install a stderr subscriber. `RUST_LOG` takes precedence over `level`.
    /// Does nothing if a global subscriber is already set.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    #[test]
    fn defaults_when_section_missing() {
        let config = FileConfigAdapter::empty();
        assert_eq!(LoggingConfig::from_config(&config), LoggingConfig::default());
    }

    #[test]
    fn reads_level_and_format() {
        let config =
            FileConfigAdapter::from_string("[logging]\nlevel = tradebook=debug\nformat = JSON\n")
                .unwrap();
        let logging = LoggingConfig::from_config(&config);
        assert_eq!(logging.level, "tradebook=debug");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn blank_level_falls_back_to_default() {
        let config = FileConfigAdapter::from_string("[logging]\nlevel =\n").unwrap();
        assert_eq!(LoggingConfig::from_config(&config).level, "warn");
    }
}
