//! Tests of the process-global factory behind `logger!` and `static_logger!`.
//!
//! The global can only be installed once per process, so everything that
//! depends on it lives in a single test.

mod common;

use common::{Alpha, Wrapper, capture, dotted};
use lazylog::{Error, LevelFilter, LoggerFactory, info, logger, static_logger};

static_logger!(MODULE_LOG);
static_logger!(ALPHA_LOG: Alpha);

#[test]
fn test_global_factory_backs_macros() {
    let (backend, factory) = capture(LevelFilter::Info);
    assert!(lazylog::set_global(factory).is_ok());

    let module = dotted(module_path!());
    let common = format!("{module}.common");

    assert_eq!(MODULE_LOG.name().as_str(), module);
    assert_eq!(ALPHA_LOG.name().as_str(), format!("{common}.Alpha"));
    assert_eq!(logger!().name().as_str(), module);
    assert_eq!(logger!(Wrapper<u8>).name().as_str(), format!("{common}.Wrapper"));
    assert_eq!(logger!(name = "app.explicit").name().as_str(), "app.explicit");
    assert_eq!(
        logger!(singleton "REGISTRY").name().as_str(),
        format!("{module}.REGISTRY")
    );
    assert_eq!(
        logger!(singleton "REGISTRY": Alpha).name().as_str(),
        format!("{common}.Alpha")
    );

    ALPHA_LOG.debug(|| "hidden");
    info!(MODULE_LOG, "started with {} workers", 4);

    let records = backend.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "started with 4 workers");
    assert_eq!(records[0].logger.as_str(), module);

    let again = lazylog::set_global(LoggerFactory::default());
    assert!(matches!(again, Err(Error::AlreadyInitialized)));
}
