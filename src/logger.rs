//! Level-guarded logging operations.
//!
//! Every operation takes the message as a closure. The closure runs at most
//! once, and only after the backend confirmed the level is enabled, so
//! building an expensive message costs nothing when the level is off:
//!
//! ```
//! use lazylog::{CaptureBackend, LevelFilter, LoggerFactory};
//!
//! let factory = LoggerFactory::new(CaptureBackend::with_level(LevelFilter::Info));
//! let logger = factory.named("app.cache");
//!
//! let mut built = 0;
//! logger.debug(|| {
//!     built += 1;
//!     "expensive dump"
//! });
//! assert_eq!(built, 0);
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::Level;
use crate::backend::BackendLogger;
use crate::naming::LoggerName;

/// A named logger bound to a backend handle.
///
/// Immutable and cheap to clone; safe to share across threads.
#[derive(Clone)]
pub struct Logger {
    handle: Arc<dyn BackendLogger>,
}

impl Logger {
    /// Wrap a handle obtained from a [`Backend`](crate::Backend).
    pub fn from_handle(handle: Arc<dyn BackendLogger>) -> Self {
        Self { handle }
    }

    pub fn name(&self) -> &LoggerName {
        self.handle.name()
    }

    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.handle.is_enabled(level)
    }

    #[inline]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    #[inline]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    #[inline]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    #[inline]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    #[inline]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// Log the message built by `message` if `level` is enabled.
    #[inline]
    pub fn log<M, F>(&self, level: Level, message: F)
    where
        M: fmt::Display,
        F: FnOnce() -> M,
    {
        if self.handle.is_enabled(level) {
            let message = message();
            self.handle.emit(level, &format_args!("{message}"), None);
        }
    }

    /// Log the message built by `message`, with `error` attached, if `level`
    /// is enabled.
    #[inline]
    pub fn log_with<M, F>(&self, level: Level, error: &(dyn StdError + 'static), message: F)
    where
        M: fmt::Display,
        F: FnOnce() -> M,
    {
        if self.handle.is_enabled(level) {
            let message = message();
            self.handle
                .emit(level, &format_args!("{message}"), Some(error));
        }
    }

    pub fn trace<M: fmt::Display>(&self, message: impl FnOnce() -> M) {
        self.log(Level::Trace, message)
    }

    pub fn debug<M: fmt::Display>(&self, message: impl FnOnce() -> M) {
        self.log(Level::Debug, message)
    }

    pub fn info<M: fmt::Display>(&self, message: impl FnOnce() -> M) {
        self.log(Level::Info, message)
    }

    pub fn warn<M: fmt::Display>(&self, message: impl FnOnce() -> M) {
        self.log(Level::Warn, message)
    }

    pub fn error<M: fmt::Display>(&self, message: impl FnOnce() -> M) {
        self.log(Level::Error, message)
    }

    pub fn trace_with<M: fmt::Display>(
        &self,
        error: &(dyn StdError + 'static),
        message: impl FnOnce() -> M,
    ) {
        self.log_with(Level::Trace, error, message)
    }

    pub fn debug_with<M: fmt::Display>(
        &self,
        error: &(dyn StdError + 'static),
        message: impl FnOnce() -> M,
    ) {
        self.log_with(Level::Debug, error, message)
    }

    pub fn info_with<M: fmt::Display>(
        &self,
        error: &(dyn StdError + 'static),
        message: impl FnOnce() -> M,
    ) {
        self.log_with(Level::Info, error, message)
    }

    pub fn warn_with<M: fmt::Display>(
        &self,
        error: &(dyn StdError + 'static),
        message: impl FnOnce() -> M,
    ) {
        self.log_with(Level::Warn, error, message)
    }

    pub fn error_with<M: fmt::Display>(
        &self,
        error: &(dyn StdError + 'static),
        message: impl FnOnce() -> M,
    ) {
        self.log_with(Level::Error, error, message)
    }

    /// Emit without checking the level. The level macros call this after
    /// their own check.
    #[doc(hidden)]
    #[inline]
    pub fn __emit(
        &self,
        level: Level,
        message: fmt::Arguments<'_>,
        error: Option<&(dyn StdError + 'static)>,
    ) {
        self.handle.emit(level, &message, error);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", self.name()).finish()
    }
}
