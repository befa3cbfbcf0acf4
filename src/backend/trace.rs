//! Backend forwarding to the `tracing` dispatcher.
//!
//! Each handle carries the threshold its name gets from the backend's
//! [`Directives`]. A level is enabled when that threshold allows it and the
//! current `tracing` subscriber is interested in events at that level for
//! [`TARGET`]. Emitted events carry the logger name in the `logger` field and
//! the attached error, if any, in the `error` field.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use super::{Backend, BackendLogger, HandleCache};
use crate::Level;
use crate::filter::Directives;
use crate::level::LevelFilter;
use crate::naming::LoggerName;

/// The `tracing` target of every event emitted through this backend.
pub const TARGET: &str = "lazylog";

macro_rules! with_tracing_level {
    ($level:expr, $lvl:ident => $body:expr) => {
        match $level {
            Level::Trace => {
                const $lvl: ::tracing::Level = Level::Trace.to_tracing();
                $body
            }
            Level::Debug => {
                const $lvl: ::tracing::Level = Level::Debug.to_tracing();
                $body
            }
            Level::Info => {
                const $lvl: ::tracing::Level = Level::Info.to_tracing();
                $body
            }
            Level::Warn => {
                const $lvl: ::tracing::Level = Level::Warn.to_tracing();
                $body
            }
            Level::Error => {
                const $lvl: ::tracing::Level = Level::Error.to_tracing();
                $body
            }
        }
    };
}

/// Logger factory backed by `tracing`.
#[derive(Debug)]
pub struct TracingBackend {
    directives: Directives,
    handles: HandleCache<TracingLogger>,
}

impl TracingBackend {
    /// A backend that defers all filtering to the installed subscriber.
    pub fn new() -> Self {
        Self::with_directives(Directives::default())
    }

    /// A backend that additionally filters by logger name.
    pub fn with_directives(directives: Directives) -> Self {
        Self {
            directives,
            handles: HandleCache::new(),
        }
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    /// Number of distinct handles handed out so far.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }
}

impl Default for TracingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for TracingBackend {
    fn logger(&self, name: &LoggerName) -> Arc<dyn BackendLogger> {
        self.handles.get_or_insert_with(name, || TracingLogger {
            name: name.clone(),
            threshold: self.directives.threshold(name),
        })
    }
}

/// Handle emitting `tracing` events for one logger name.
#[derive(Debug)]
struct TracingLogger {
    name: LoggerName,
    threshold: LevelFilter,
}

impl BackendLogger for TracingLogger {
    fn name(&self) -> &LoggerName {
        &self.name
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.threshold.allows(level)
            && with_tracing_level!(level, LEVEL => ::tracing::enabled!(target: TARGET, LEVEL))
    }

    fn emit(
        &self,
        level: Level,
        message: &fmt::Arguments<'_>,
        error: Option<&(dyn StdError + 'static)>,
    ) {
        let logger = self.name.as_str();
        match error {
            Some(error) => with_tracing_level!(level, LEVEL => {
                ::tracing::event!(target: TARGET, LEVEL, logger, error, "{}", message)
            }),
            None => with_tracing_level!(level, LEVEL => {
                ::tracing::event!(target: TARGET, LEVEL, logger, "{}", message)
            }),
        }
    }
}
