//! Common test utilities and fixtures.
//!
//! Shared fixture types and helpers used across the integration tests.

#![allow(dead_code)]

use lazylog::{CaptureBackend, Directives, LevelFilter, LoggerFactory};

// =============================================================================
// Fixture Types
// =============================================================================

/// A top-level type.
pub struct Alpha;

/// A generic type.
pub struct Wrapper<T>(pub T);

/// A type with two generic parameters.
pub struct Pair<A, B>(pub A, pub B);

pub mod outer {
    /// A type declared one module down.
    pub struct Inner;
}

// =============================================================================
// Configuration
// =============================================================================

/// A configuration exercising every section.
pub const FULL_CONFIG: &str = r#"
[naming]
strategy = "symbol"

[filter]
default = "warn"

[filter.loggers]
"app.db" = "debug"
"app.db.Pool" = "trace"
"app.http" = "off"

[subscriber]
level = "info"
format = "json"
output = "stdout"
timestamps = false
"#;

// =============================================================================
// Helpers
// =============================================================================

/// A capture backend enabling `filter` everywhere, and a factory over it.
pub fn capture(filter: LevelFilter) -> (CaptureBackend, LoggerFactory) {
    capture_with(Directives::new(filter))
}

/// A capture backend with `directives`, and a factory over it.
pub fn capture_with(directives: Directives) -> (CaptureBackend, LoggerFactory) {
    let backend = CaptureBackend::new(directives);
    (backend.clone(), LoggerFactory::new(backend))
}

/// `module_path!()` of the caller's type, dotted.
pub fn dotted(path: &str) -> String {
    path.replace("::", ".")
}
