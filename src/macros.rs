//! Acquisition and level macros.
//!
//! The level macros expand to an enabled check wrapping the emit, so the
//! `format_args!` arguments are only evaluated when the level is on:
//!
//! ```
//! use lazylog::{CaptureBackend, LevelFilter, LoggerFactory, debug, error};
//!
//! let backend = CaptureBackend::with_level(LevelFilter::Info);
//! let logger = LoggerFactory::new(backend.clone()).named("app.sync");
//!
//! let failure = std::io::Error::other("timeout");
//! debug!(logger, "peers: {:?}", vec!["a", "b"]);
//! error!(logger, error: &failure, "sync failed after {} attempts", 3);
//!
//! let records = backend.records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "sync failed after 3 attempts");
//! assert_eq!(records[0].error.as_deref(), Some("timeout"));
//! ```

/// Log at a runtime-chosen level.
///
/// `log!(logger, level, "fmt", args..)` or
/// `log!(logger, level, error: &err, "fmt", args..)`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, error: $error:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            let error: &(dyn ::std::error::Error + 'static) = $error;
            logger.__emit(level, ::std::format_args!($($arg)+), ::std::option::Option::Some(error));
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            logger.__emit(level, ::std::format_args!($($arg)+), ::std::option::Option::None);
        }
    }};
}

/// Log at [`Level::Trace`](crate::Level::Trace).
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Trace, $($arg)+) };
}

/// Log at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Debug, $($arg)+) };
}

/// Log at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Info, $($arg)+) };
}

/// Log at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Warn, $($arg)+) };
}

/// Log at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Error, $($arg)+) };
}

/// Get a [`Logger`](crate::Logger) from the global factory.
///
/// - `logger!()`: named after the enclosing module
/// - `logger!(Type)`: named after `Type`, generic arguments erased
/// - `logger!(singleton "NAME")`: for a `static` item in the enclosing module
/// - `logger!(singleton "NAME": Type)`: the same, with the item's type
/// - `logger!(name = expr)`: an explicit name
/// - `logger!(context = expr)`: an explicit [`Context`](crate::naming::Context)
#[macro_export]
macro_rules! logger {
    () => {
        $crate::global().logger(&$crate::naming::Context::module(::std::module_path!()))
    };
    (name = $name:expr) => {
        $crate::global().named($name)
    };
    (context = $context:expr) => {
        $crate::global().logger(&$context)
    };
    (singleton $name:literal : $ty:ty) => {
        $crate::global().logger(
            &$crate::naming::Context::module(::std::module_path!())
                .singleton($name)
                .typed::<$ty>(),
        )
    };
    (singleton $name:literal) => {
        $crate::global().logger(
            &$crate::naming::Context::module(::std::module_path!()).singleton($name),
        )
    };
    ($ty:ty) => {
        $crate::global().logger_for::<$ty>()
    };
}

/// Declare a `static` [`Logger`](crate::Logger) created on first use.
///
/// ```
/// use lazylog::static_logger;
///
/// struct Pool;
///
/// static_logger!(LOG: Pool);
/// static_logger!(MODULE_LOG);
///
/// assert!(LOG.name().as_str().ends_with(".Pool"));
/// assert!(!MODULE_LOG.name().is_root());
/// ```
#[macro_export]
macro_rules! static_logger {
    ($vis:vis $name:ident : $ty:ty) => {
        $vis static $name: ::std::sync::LazyLock<$crate::Logger> =
            ::std::sync::LazyLock::new(|| $crate::logger!($ty));
    };
    ($vis:vis $name:ident) => {
        $vis static $name: ::std::sync::LazyLock<$crate::Logger> =
            ::std::sync::LazyLock::new(|| $crate::logger!());
    };
}
