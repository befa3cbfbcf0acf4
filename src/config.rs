//! Facade configuration loaded from TOML.
//!
//! Every section and key is optional:
//!
//! ```toml
//! [naming]
//! strategy = "type"            # or "symbol"; applies to singletons
//!
//! [filter]
//! default = "info"
//!
//! [filter.loggers]
//! "app.db" = "debug"
//! "app.http" = "off"
//!
//! [subscriber]
//! level = "info"               # tracing EnvFilter directive
//! format = "text"              # or "json"
//! output = "stderr"            # "stdout", "stderr" or a file path
//! color = true
//! timestamps = true
//! target = true
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::backend::TracingBackend;
use crate::factory::{LoggerFactory, NamingConfig};
use crate::filter::Directives;
use crate::level::LevelFilter;
use crate::logging;

/// Facade configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logger naming defaults.
    pub naming: NamingConfig,
    /// Per-logger level thresholds.
    pub filter: FilterConfig,
    /// Tracing subscriber settings.
    pub subscriber: SubscriberConfig,
}

/// Level thresholds by logger name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Threshold for loggers no entry in `loggers` matches.
    pub default: LevelFilter,
    /// Thresholds keyed by logger-name prefix.
    pub loggers: BTreeMap<String, LevelFilter>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default: LevelFilter::Info,
            loggers: BTreeMap::new(),
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubscriberConfig {
    /// `EnvFilter` directive, e.g. `"info,lazylog=debug"`.
    pub level: String,
    pub format: LogFormat,
    /// `"stdout"`, `"stderr"`, or a file path to append to.
    pub output: String,
    /// ANSI colors, when writing to a terminal.
    pub color: bool,
    pub timestamps: bool,
    /// Include the event target.
    pub target: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            output: "stderr".to_string(),
            color: true,
            timestamps: true,
            target: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        logging::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Per-logger thresholds as [`Directives`].
    pub fn directives(&self) -> Directives {
        self.filter
            .loggers
            .iter()
            .fold(Directives::new(self.filter.default), |directives, (name, filter)| {
                directives.with(name.as_str(), *filter)
            })
    }

    /// A factory over a [`TracingBackend`] filtered and named per this configuration.
    pub fn factory(&self) -> LoggerFactory {
        LoggerFactory::new(TracingBackend::with_directives(self.directives()))
            .with_naming(self.naming)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml(s)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML parse error.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use crate::naming::{LoggerName, NamingStrategy};

    #[test]
    fn test_parse_config() -> Result<(), ConfigError> {
        let toml = r#"
[naming]
strategy = "symbol"

[filter]
default = "warn"

[filter.loggers]
"app.db" = "debug"
"app.http" = "off"

[subscriber]
level = "debug,hyper=warn"
format = "json"
output = "/var/log/app.log"
color = false
"#;
        let config = Config::from_toml(toml)?;

        assert_eq!(config.naming.strategy, NamingStrategy::BySymbol);
        assert_eq!(config.filter.default, LevelFilter::Warn);
        assert_eq!(config.filter.loggers.len(), 2);
        assert_eq!(config.subscriber.format, LogFormat::Json);
        assert_eq!(config.subscriber.output, "/var/log/app.log");
        assert!(!config.subscriber.color);
        assert!(config.subscriber.timestamps);
        Ok(())
    }

    #[test]
    fn test_empty_config_uses_defaults() -> Result<(), ConfigError> {
        let config = Config::from_toml("")?;
        assert_eq!(config.naming, NamingConfig::default());
        assert_eq!(config.filter, FilterConfig::default());
        assert_eq!(config.subscriber, SubscriberConfig::default());
        assert_eq!(config.filter.default, LevelFilter::Info);
        Ok(())
    }

    #[test]
    fn test_directives_from_config() -> Result<(), ConfigError> {
        let config: Config = r#"
[filter]
default = "error"
[filter.loggers]
"app" = "info"
"app.db" = "trace"
"#
        .parse()?;

        let directives = config.directives();
        assert!(directives.enabled(&LoggerName::new("app.db.Pool"), Level::Trace));
        assert!(directives.enabled(&LoggerName::new("app.http"), Level::Info));
        assert!(!directives.enabled(&LoggerName::new("app.http"), Level::Debug));
        assert!(!directives.enabled(&LoggerName::new("lib"), Level::Warn));
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_toml("[filter]\ndefault = \"loud\"").is_err());
        assert!(Config::from_toml("[naming]\nstrategy = \"class\"").is_err());
        assert!(Config::from_toml("[subscriber]\nformat = \"xml\"").is_err());
        assert!(Config::from_toml("[unknown]\nkey = 1").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/lazylog.toml").err();
        assert!(matches!(err, Some(ConfigError::Io { .. })));
        assert!(err.is_some_and(|e| e.to_string().contains("/nonexistent/lazylog.toml")));
    }
}
