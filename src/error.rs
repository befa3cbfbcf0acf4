//! Unified error type for lazylog.
//!
//! Logging itself never fails; these errors come from parsing levels and
//! directives, loading configuration and installing the subscriber.

use thiserror::Error;

#[cfg(feature = "config")]
use crate::config::ConfigError;
use crate::filter::ParseDirectiveError;
use crate::level::ParseLevelError;
#[cfg(feature = "subscriber")]
use crate::subscriber::SubscriberError;

/// Unified error type for all fallible lazylog operations.
///
/// # Example
///
/// ```
/// use lazylog::{Directives, Result};
///
/// fn quiet_http() -> Result<Directives> {
///     Ok("info,app.http=warn".parse()?)
/// }
/// # assert!(quiet_http().is_ok());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Error loading a configuration file.
    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid level directive string.
    #[error(transparent)]
    Directive(#[from] ParseDirectiveError),

    /// Invalid level name.
    #[error(transparent)]
    Level(#[from] ParseLevelError),

    /// Error installing the tracing subscriber.
    #[cfg(feature = "subscriber")]
    #[error(transparent)]
    Subscriber(#[from] SubscriberError),

    /// The global logger factory was set or used before.
    #[error("global logger factory is already initialized")]
    AlreadyInitialized,
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a configuration error.
    #[cfg(feature = "config")]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns `true` if this is a level or directive parsing error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Directive(_) | Self::Level(_))
    }
}
