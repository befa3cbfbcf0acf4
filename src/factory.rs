//! Logger acquisition.
//!
//! [`LoggerFactory`] resolves a [`Context`] to a [`LoggerName`] and asks its
//! backend for the matching handle. Names derived from a type are cached per
//! [`TypeId`]; handles are interned by the backend, not here.
//!
//! The process-global factory behind the [`logger!`](crate::logger) macro is
//! created on first use with a [`TracingBackend`], unless [`set_global`] ran
//! first.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::backend::{Backend, TracingBackend};
use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::logging;
use crate::naming::{Context, LoggerName, NamingStrategy};

/// Naming defaults applied when a call site does not pick a strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize), serde(default))]
pub struct NamingConfig {
    /// Strategy for singleton contexts. Top-level types are always named by
    /// type and nested types by their enclosing scopes.
    pub strategy: NamingStrategy,
}

/// Creates [`Logger`]s for contexts.
pub struct LoggerFactory {
    backend: Arc<dyn Backend>,
    naming: NamingConfig,
    type_names: RwLock<HashMap<TypeId, LoggerName>>,
}

impl LoggerFactory {
    pub fn new(backend: impl Backend) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    pub fn from_arc(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            naming: NamingConfig::default(),
            type_names: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_naming(mut self, naming: NamingConfig) -> Self {
        self.naming = naming;
        self
    }

    pub fn naming(&self) -> NamingConfig {
        self.naming
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// Logger for `context`, named with the default strategy.
    pub fn logger(&self, context: &Context) -> Logger {
        self.logger_with(context, self.naming.strategy)
    }

    /// Logger for `context`, named with `strategy`.
    pub fn logger_with(&self, context: &Context, strategy: NamingStrategy) -> Logger {
        let name = context.resolve(strategy);
        logging::trace!(logger = %name, ?strategy, "resolved logger name");
        self.named(name)
    }

    /// Logger owned by the type `T`.
    pub fn logger_for<T: ?Sized + 'static>(&self) -> Logger {
        self.named(self.name_for::<T>())
    }

    /// The name [`logger_for`](Self::logger_for) uses for `T`, cached per type.
    pub fn name_for<T: ?Sized + 'static>(&self) -> LoggerName {
        let id = TypeId::of::<T>();
        if let Some(name) = self
            .type_names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return name.clone();
        }

        let context = Context::of_type::<T>();
        let name = context.resolve(self.naming.strategy);
        logging::debug!(logger = %name, type_name = std::any::type_name::<T>(), "caching logger name");
        self.type_names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_insert(name)
            .clone()
    }

    /// Logger with an explicit name.
    pub fn named(&self, name: impl Into<LoggerName>) -> Logger {
        Logger::from_handle(self.backend.logger(&name.into()))
    }

    /// Number of types whose names are cached.
    pub fn cached_types(&self) -> usize {
        self.type_names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self::new(TracingBackend::default())
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("naming", &self.naming)
            .field("cached_types", &self.cached_types())
            .finish_non_exhaustive()
    }
}

static GLOBAL: OnceLock<LoggerFactory> = OnceLock::new();

/// The process-global factory, created with defaults on first use.
pub fn global() -> &'static LoggerFactory {
    GLOBAL.get_or_init(LoggerFactory::default)
}

/// Install `factory` as the process-global factory.
///
/// Fails if the global factory was already installed or already used.
pub fn set_global(factory: LoggerFactory) -> Result<()> {
    GLOBAL.set(factory).map_err(|_| Error::AlreadyInitialized)
}
