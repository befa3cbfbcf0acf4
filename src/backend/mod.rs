//! The contract a logging backend fulfils.
//!
//! A [`Backend`] is a logger factory: given a [`LoggerName`] it hands out a
//! shared [`BackendLogger`] handle, interning handles by name. The handle
//! answers per-level enabled queries and emits messages. The facade never
//! builds handles itself and adds no state of its own on top of them.
//!
//! - [`TracingBackend`]: forwards to the `tracing` dispatcher (default)
//! - [`CaptureBackend`]: records calls in memory

mod capture;
mod trace;

pub use capture::{Call, CaptureBackend, Record};
pub use trace::{TARGET, TracingBackend};

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::Level;
use crate::logging;
use crate::naming::LoggerName;

/// A logger factory.
pub trait Backend: Send + Sync + 'static {
    /// Get the handle for `name`, creating it on first request.
    ///
    /// Repeated calls with an equal name return the same handle.
    fn logger(&self, name: &LoggerName) -> Arc<dyn BackendLogger>;
}

/// A named logger handle.
pub trait BackendLogger: Send + Sync {
    fn name(&self) -> &LoggerName;

    /// Check whether messages at `level` would be emitted. Must be free of
    /// side effects visible to the caller.
    fn is_enabled(&self, level: Level) -> bool;

    /// Emit `message` at `level`, with an optional attached error.
    fn emit(
        &self,
        level: Level,
        message: &fmt::Arguments<'_>,
        error: Option<&(dyn StdError + 'static)>,
    );
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn logger(&self, name: &LoggerName) -> Arc<dyn BackendLogger> {
        (**self).logger(name)
    }
}

/// Handles interned by logger name.
pub(crate) struct HandleCache<H> {
    handles: RwLock<HashMap<LoggerName, Arc<H>>>,
}

impl<H: BackendLogger + 'static> HandleCache<H> {
    pub(crate) fn new() -> Self {
        Self {
            handles: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn get_or_insert_with(
        &self,
        name: &LoggerName,
        create: impl FnOnce() -> H,
    ) -> Arc<H> {
        if let Some(handle) = self
            .handles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Arc::clone(handle);
        }

        let mut handles = self.handles.write().unwrap_or_else(PoisonError::into_inner);
        let handle = handles.entry(name.clone()).or_insert_with(|| {
            logging::trace!(logger = %name, "creating backend logger handle");
            Arc::new(create())
        });
        Arc::clone(handle)
    }

    pub(crate) fn len(&self) -> usize {
        self.handles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<H> fmt::Debug for HandleCache<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .handles
            .read()
            .map(|handles| handles.len())
            .unwrap_or_default();
        f.debug_struct("HandleCache").field("handles", &len).finish()
    }
}
