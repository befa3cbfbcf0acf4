//! Diagnostics about the facade itself.
//!
//! Name resolution, handle creation and configuration loading report through
//! these macros. With the `logging` feature they become `tracing` events under
//! the `lazylog::internal` target; without it they expand to nothing.
//!
//! ```rust,ignore
//! use crate::logging;
//!
//! logging::trace!(logger = %name, "creating backend logger handle");
//! ```

#[cfg(feature = "logging")]
macro_rules! internal_trace {
    ($($arg:tt)*) => { ::tracing::trace!(target: "lazylog::internal", $($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! internal_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! internal_debug {
    ($($arg:tt)*) => { ::tracing::debug!(target: "lazylog::internal", $($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! internal_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
#[allow(unused_macros)]
macro_rules! internal_info {
    ($($arg:tt)*) => { ::tracing::info!(target: "lazylog::internal", $($arg)*) }
}

#[cfg(not(feature = "logging"))]
#[allow(unused_macros)]
macro_rules! internal_info {
    ($($arg:tt)*) => {};
}

pub(crate) use internal_debug as debug;
#[allow(unused_imports)]
pub(crate) use internal_info as info;
pub(crate) use internal_trace as trace;
