use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid log level {level:?}: expected one of trace, debug, info, warn, error")]
    InvalidLevel { level: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Trend scraper endpoint, hit once per run cycle.
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/scrape-trends".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level name ("info", "DEBUG", ...).
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.level
            .trim()
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLevel {
                level: self.level.clone(),
            })
    }
}

impl Config {
    /// Build the config from build-time environment overrides.
    ///
    /// The browser has no process environment, so `TRENDS_ENDPOINT` and
    /// `TRENDS_LOG_LEVEL` are read when the crate is compiled.
    pub fn from_env() -> Self {
        Self::with_overrides(option_env!("TRENDS_ENDPOINT"), option_env!("TRENDS_LOG_LEVEL"))
    }

    fn with_overrides(endpoint: Option<&str>, level: Option<&str>) -> Self {
        let mut config = Config::default();
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            config.scraper.endpoint = endpoint.trim().to_string();
        }
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            config.logging.level = level.trim().to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_scraper() {
        let config = Config::default();
        assert_eq!(config.scraper.endpoint, "http://127.0.0.1:5000/scrape-trends");
        assert_eq!(config.logging.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = Config::with_overrides(Some(" http://10.0.0.2:8080/trends "), Some("debug"));
        assert_eq!(config.scraper.endpoint, "http://10.0.0.2:8080/trends");
        assert_eq!(config.logging.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = Config::with_overrides(Some(""), Some("  "));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let config = Config::with_overrides(None, Some("chatty"));
        let err = config.logging.level().unwrap_err();
        assert!(matches!(&err, ConfigError::InvalidLevel { level } if level == "chatty"));
        assert_eq!(
            err.to_string(),
            r#"invalid log level "chatty": expected one of trace, debug, info, warn, error"#
        );
    }
}
