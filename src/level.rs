//! Log levels and level filters.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a [`Level`] or [`LevelFilter`] from a string fails.
///
/// # Example
///
/// ```
/// use lazylog::Level;
///
/// let err = "loud".parse::<Level>().unwrap_err();
/// assert!(err.to_string().contains("loud"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid level '{input}': expected one of {expected}")]
pub struct ParseLevelError {
    input: String,
    expected: &'static str,
}

/// Severity of a log message, ordered from least to most severe.
///
/// ```
/// use lazylog::Level;
///
/// assert!(Level::Trace < Level::Error);
/// assert_eq!(Level::Warn.to_string(), "WARN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// Upper-case display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Name of the backend predicate answering whether this level is enabled.
    pub const fn enabled_op(self) -> &'static str {
        match self {
            Level::Trace => "is_trace_enabled",
            Level::Debug => "is_debug_enabled",
            Level::Info => "is_info_enabled",
            Level::Warn => "is_warn_enabled",
            Level::Error => "is_error_enabled",
        }
    }

    /// Name of the backend operation emitting a message at this level.
    pub const fn emit_op(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// The matching `tracing` level.
    pub const fn to_tracing(self) -> tracing::Level {
        match self {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .or_else(|| s.trim().eq_ignore_ascii_case("warning").then_some(Level::Warn))
            .ok_or_else(|| ParseLevelError {
                input: s.to_string(),
                expected: "trace, debug, info, warn, error",
            })
    }
}

/// Minimum severity a logger lets through.
///
/// A [`Level`] passes a filter when it is at least as severe as the filter;
/// [`LevelFilter::Off`] lets nothing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LevelFilter {
    #[default]
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LevelFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            LevelFilter::Trace => "trace",
            LevelFilter::Debug => "debug",
            LevelFilter::Info => "info",
            LevelFilter::Warn => "warn",
            LevelFilter::Error => "error",
            LevelFilter::Off => "off",
        }
    }

    /// Check whether `level` passes this filter.
    pub const fn allows(self, level: Level) -> bool {
        level as u8 >= self as u8
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::Trace,
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warn => LevelFilter::Warn,
            Level::Error => LevelFilter::Error,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("off") {
            return Ok(LevelFilter::Off);
        }
        s.parse::<Level>()
            .map(LevelFilter::from)
            .map_err(|_| ParseLevelError {
                input: s.to_string(),
                expected: "trace, debug, info, warn, error, off",
            })
    }
}

#[cfg(feature = "config")]
impl<'de> serde::Deserialize<'de> for LevelFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
