//! Level-guarded, lazily evaluated logging with type-derived logger names.
//!
//! A [`Logger`] checks whether a level is enabled before it builds the
//! message, so expensive formatting costs nothing when the level is off.
//! Logger names come from the context that requests them: the owning type
//! (generic arguments erased) or the chain of enclosing scopes.
//!
//! # Quick Start
//!
//! ```
//! use lazylog::{info, static_logger};
//!
//! struct Pool {
//!     size: usize,
//! }
//!
//! static_logger!(LOG: Pool);
//!
//! impl Pool {
//!     fn grow(&mut self) {
//!         self.size *= 2;
//!         LOG.debug(|| format!("grew pool to {}", self.size));
//!         info!(LOG, "pool size is now {}", self.size);
//!     }
//! }
//!
//! let mut pool = Pool { size: 4 };
//! pool.grow();
//! assert!(LOG.name().as_str().ends_with(".Pool"));
//! ```
//!
//! Messages go to the [`Backend`] of the global [`LoggerFactory`], a
//! [`TracingBackend`] unless [`set_global`] installed another one.
//!
//! # Modules
//!
//! - [`naming`] - Logger names and the contexts they are derived from
//! - [`backend`] - The backend contract, the `tracing` backend and the capture backend
//! - [`config`] - TOML configuration (requires `config` feature)
//! - [`subscriber`] - Tracing subscriber initialization (requires `subscriber` feature)
//!
//! # Feature Flags
//!
//! - `config` - Enable TOML configuration loading (enabled by default)
//! - `subscriber` - Enable `tracing-subscriber` initialization
//! - `logging` - Enable the facade's own diagnostics under the `lazylog::internal` target
//! - `cli` - Enable the `lazylog` inspection binary
//! - `full` - Enable all features

pub mod backend;
#[cfg(feature = "config")]
pub mod config;
mod error;
mod factory;
mod filter;
mod level;
mod logger;
mod logging;
mod macros;
pub mod naming;
#[cfg(feature = "subscriber")]
pub mod subscriber;

// Re-export the unified error type
pub use error::{Error, Result};

pub use backend::{Backend, BackendLogger, CaptureBackend, TracingBackend};
pub use factory::{LoggerFactory, NamingConfig, global, set_global};
pub use filter::{Directives, ParseDirectiveError};
pub use level::{Level, LevelFilter, ParseLevelError};
pub use logger::Logger;
pub use naming::{Context, LoggerName, NamingStrategy};

#[cfg(feature = "config")]
pub use config::{Config, ConfigError};
