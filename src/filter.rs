//! Per-logger level directives.
//!
//! A directive string is a comma-separated list. A bare level sets the
//! default; `name=level` sets the level for a logger name and everything
//! nested below it:
//!
//! ```
//! use lazylog::{Directives, Level, LoggerName};
//!
//! let directives: Directives = "warn,app.db=debug,app.db.Pool=off".parse().unwrap();
//!
//! assert!(directives.enabled(&LoggerName::new("app.db.Conn"), Level::Debug));
//! assert!(!directives.enabled(&LoggerName::new("app.db.Pool"), Level::Error));
//! assert!(!directives.enabled(&LoggerName::new("app.http"), Level::Info));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::level::{LevelFilter, ParseLevelError};
use crate::naming::LoggerName;
use crate::Level;

/// Errors that can occur while parsing a directive string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDirectiveError {
    #[error("invalid level in directive '{directive}': {source}")]
    Level {
        directive: String,
        #[source]
        source: ParseLevelError,
    },

    #[error("missing logger name in directive '{0}'")]
    MissingName(String),
}

/// Level thresholds keyed by logger-name prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    default: LevelFilter,
    /// Longest prefix first.
    rules: Vec<(LoggerName, LevelFilter)>,
}

impl Directives {
    /// Directives with only a default threshold.
    pub fn new(default: LevelFilter) -> Self {
        Self {
            default,
            rules: Vec::new(),
        }
    }

    /// Add or replace the threshold for `prefix`.
    pub fn with(mut self, prefix: impl Into<LoggerName>, filter: LevelFilter) -> Self {
        self.set(prefix.into(), filter);
        self
    }

    fn set(&mut self, prefix: LoggerName, filter: LevelFilter) {
        if prefix.is_root() {
            self.default = filter;
            return;
        }
        self.rules.retain(|(existing, _)| *existing != prefix);
        let pos = self
            .rules
            .iter()
            .position(|(existing, _)| existing.as_str().len() < prefix.as_str().len())
            .unwrap_or(self.rules.len());
        self.rules.insert(pos, (prefix, filter));
    }

    /// Parse a directive string such as `"info,app.db=debug"`.
    pub fn parse(input: &str) -> Result<Self, ParseDirectiveError> {
        let mut directives = Self::default();

        for directive in input.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            let level_error = |source| ParseDirectiveError::Level {
                directive: directive.to_string(),
                source,
            };

            match directive.split_once('=') {
                Some((name, level)) => {
                    let name = LoggerName::new(name);
                    if name.is_root() {
                        return Err(ParseDirectiveError::MissingName(directive.to_string()));
                    }
                    let filter = level.parse().map_err(level_error)?;
                    directives.set(name, filter);
                }
                None => {
                    directives.default = directive.parse().map_err(level_error)?;
                }
            }
        }

        Ok(directives)
    }

    /// The threshold applying to `name`: the longest matching prefix, or the default.
    pub fn threshold(&self, name: &LoggerName) -> LevelFilter {
        self.rules
            .iter()
            .find(|(prefix, _)| name.is_within(prefix.as_str()))
            .map_or(self.default, |(_, filter)| *filter)
    }

    /// Check whether `level` is enabled for `name`.
    pub fn enabled(&self, name: &LoggerName, level: Level) -> bool {
        self.threshold(name).allows(level)
    }

    pub fn default_filter(&self) -> LevelFilter {
        self.default
    }

    /// Number of per-name rules, excluding the default.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromStr for Directives {
    type Err = ParseDirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Directives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default)?;
        for (prefix, filter) in &self.rules {
            write!(f, ",{prefix}={filter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> LoggerName {
        LoggerName::new(s)
    }

    #[test]
    fn test_default_allows_everything() {
        let directives = Directives::default();
        assert_eq!(directives.default_filter(), LevelFilter::Trace);
        assert!(directives.enabled(&name("any.thing"), Level::Trace));
    }

    #[test]
    fn test_parse() -> Result<(), ParseDirectiveError> {
        let directives = Directives::parse("warn, app.db=debug ,app::http=off")?;
        assert_eq!(directives.default_filter(), LevelFilter::Warn);
        assert_eq!(directives.len(), 2);
        assert_eq!(directives.threshold(&name("app.db")), LevelFilter::Debug);
        assert_eq!(directives.threshold(&name("app.http.Server")), LevelFilter::Off);
        assert_eq!(directives.threshold(&name("other")), LevelFilter::Warn);
        Ok(())
    }

    #[test]
    fn test_longest_prefix_wins() {
        let directives = Directives::new(LevelFilter::Error)
            .with("app", LevelFilter::Info)
            .with("app.db.Pool", LevelFilter::Trace)
            .with("app.db", LevelFilter::Warn);

        assert_eq!(directives.threshold(&name("app.db.Pool.Conn")), LevelFilter::Trace);
        assert_eq!(directives.threshold(&name("app.db.Cursor")), LevelFilter::Warn);
        assert_eq!(directives.threshold(&name("app.http")), LevelFilter::Info);
        assert_eq!(directives.threshold(&name("lib")), LevelFilter::Error);
    }

    #[test]
    fn test_segment_boundary() {
        let directives = Directives::new(LevelFilter::Off).with("app.db", LevelFilter::Trace);
        assert!(directives.enabled(&name("app.db"), Level::Trace));
        assert!(!directives.enabled(&name("app.dbx"), Level::Error));
    }

    #[test]
    fn test_trailing_separator_is_dropped() -> Result<(), ParseDirectiveError> {
        let directives = Directives::new(LevelFilter::Off).with("app.", LevelFilter::Trace);
        assert_eq!(directives.threshold(&name("app.db")), LevelFilter::Trace);

        let parsed = Directives::parse("off,app.db.=debug")?;
        assert_eq!(parsed.threshold(&name("app.db.Pool")), LevelFilter::Debug);
        assert_eq!(parsed.to_string(), "off,app.db=debug");
        Ok(())
    }

    #[test]
    fn test_later_rule_replaces_earlier() -> Result<(), ParseDirectiveError> {
        let directives = Directives::parse("app=debug,app=error")?;
        assert_eq!(directives.len(), 1);
        assert_eq!(directives.threshold(&name("app")), LevelFilter::Error);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Directives::parse("app=loud"),
            Err(ParseDirectiveError::Level { .. })
        ));
        assert!(matches!(
            Directives::parse("=debug"),
            Err(ParseDirectiveError::MissingName(_))
        ));
        assert!(matches!(
            Directives::parse(".=debug"),
            Err(ParseDirectiveError::MissingName(_))
        ));
        assert!(Directives::parse("chatty").is_err());
    }

    #[test]
    fn test_display_reparses() -> Result<(), ParseDirectiveError> {
        let directives = Directives::parse("info,app.db=debug,app=warn")?;
        let text = directives.to_string();
        assert_eq!(text, "info,app.db=debug,app=warn");
        assert_eq!(Directives::parse(&text).ok(), Some(directives));
        Ok(())
    }
}
