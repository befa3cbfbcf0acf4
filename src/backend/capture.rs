//! In-memory backend that records every call it receives.
//!
//! Useful in tests: it shows exactly which enabled queries and emits a piece
//! of code performed, and in what order.
//!
//! ```
//! use lazylog::{CaptureBackend, Level, LevelFilter, LoggerFactory};
//!
//! let backend = CaptureBackend::with_level(LevelFilter::Info);
//! let factory = LoggerFactory::new(backend.clone());
//! let logger = factory.named("app");
//!
//! logger.debug(|| "hidden");
//! logger.info(|| "shown");
//!
//! assert_eq!(backend.records().len(), 1);
//! assert_eq!(backend.records()[0].level, Level::Info);
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::{Backend, BackendLogger, HandleCache};
use crate::Level;
use crate::filter::Directives;
use crate::level::LevelFilter;
use crate::naming::LoggerName;

/// A message that reached the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub logger: LoggerName,
    pub level: Level,
    pub message: String,
    /// The attached error, rendered with `Display`.
    pub error: Option<String>,
}

/// One call received by a [`CaptureBackend`] handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Enabled {
        logger: LoggerName,
        level: Level,
        enabled: bool,
    },
    Emit(Record),
}

impl Call {
    /// Name of the backend operation this call corresponds to.
    pub fn op(&self) -> &'static str {
        match self {
            Call::Enabled { level, .. } => level.enabled_op(),
            Call::Emit(record) => record.level.emit_op(),
        }
    }
}

#[derive(Debug)]
struct Shared {
    directives: RwLock<Directives>,
    calls: Mutex<Vec<Call>>,
}

impl Shared {
    fn push(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

/// Recording logger factory. Clones share the same journal.
#[derive(Debug, Clone)]
pub struct CaptureBackend {
    shared: Arc<Shared>,
    handles: Arc<HandleCache<CaptureLogger>>,
}

impl CaptureBackend {
    pub fn new(directives: Directives) -> Self {
        Self {
            shared: Arc::new(Shared {
                directives: RwLock::new(directives),
                calls: Mutex::new(Vec::new()),
            }),
            handles: Arc::new(HandleCache::new()),
        }
    }

    /// A backend enabling `filter` for every logger.
    pub fn with_level(filter: LevelFilter) -> Self {
        Self::new(Directives::new(filter))
    }

    /// Replace the filtering rules. Existing handles see the change.
    pub fn set_directives(&self, directives: Directives) {
        *self
            .shared
            .directives
            .write()
            .unwrap_or_else(PoisonError::into_inner) = directives;
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.shared
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every emitted record so far, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Emit(record) => Some(record),
                Call::Enabled { .. } => None,
            })
            .collect()
    }

    pub fn emit_count(&self) -> usize {
        self.records().len()
    }

    pub fn enabled_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Enabled { .. }))
            .count()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        self.shared
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of distinct handles handed out so far.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }
}

impl Default for CaptureBackend {
    fn default() -> Self {
        Self::new(Directives::default())
    }
}

impl Backend for CaptureBackend {
    fn logger(&self, name: &LoggerName) -> Arc<dyn BackendLogger> {
        self.handles.get_or_insert_with(name, || CaptureLogger {
            name: name.clone(),
            shared: Arc::clone(&self.shared),
        })
    }
}

struct CaptureLogger {
    name: LoggerName,
    shared: Arc<Shared>,
}

impl BackendLogger for CaptureLogger {
    fn name(&self) -> &LoggerName {
        &self.name
    }

    fn is_enabled(&self, level: Level) -> bool {
        let enabled = self
            .shared
            .directives
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .enabled(&self.name, level);
        self.shared.push(Call::Enabled {
            logger: self.name.clone(),
            level,
            enabled,
        });
        enabled
    }

    fn emit(
        &self,
        level: Level,
        message: &fmt::Arguments<'_>,
        error: Option<&(dyn StdError + 'static)>,
    ) {
        self.shared.push(Call::Emit(Record {
            logger: self.name.clone(),
            level,
            message: message.to_string(),
            error: error.map(ToString::to_string),
        }));
    }
}
