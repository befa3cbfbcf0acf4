//! Tracing subscriber initialization from configuration.
//!
//! Events emitted through the [`TracingBackend`](crate::TracingBackend) only
//! show up once a subscriber is installed. [`init`] installs one built from a
//! [`SubscriberConfig`]: an `EnvFilter` plus a text or JSON formatting layer
//! writing to stdout, stderr or an appended file.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::{Layered, SubscriberExt},
};

use crate::config::{LogFormat, SubscriberConfig};
use crate::logging;

type FilteredRegistry = Layered<EnvFilter, Registry>;

/// Errors that can occur during subscriber initialization.
#[derive(Debug, thiserror::Error)]
pub enum SubscriberError {
    /// Invalid `EnvFilter` directive.
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// Failed to open the log file.
    #[error("failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the subscriber described by `config` as the global default.
pub fn init(config: &SubscriberConfig) -> Result<(), SubscriberError> {
    let writer = open_writer(&config.output)?;
    let ansi = config.color && output_is_terminal(&config.output);
    let subscriber = build(config, writer, ansi)?;

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| SubscriberError::AlreadyInitialized)?;

    logging::info!(level = %config.level, output = %config.output, "tracing subscriber installed");
    Ok(())
}

/// Build the subscriber described by `config`, writing to `writer` instead of
/// `config.output`. ANSI colors are never used.
pub fn build_with_writer(
    config: &SubscriberConfig,
    writer: BoxMakeWriter,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, SubscriberError> {
    build(config, writer, false)
}

fn build(
    config: &SubscriberConfig,
    writer: BoxMakeWriter,
    ansi: bool,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, SubscriberError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| SubscriberError::InvalidFilter(e.to_string()))?;

    let layer: Box<dyn Layer<FilteredRegistry> + Send + Sync> = match config.format {
        LogFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(ansi)
                .with_target(config.target)
                .with_span_events(FmtSpan::NONE)
                .with_writer(writer);
            if config.timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(config.target)
                .with_span_events(FmtSpan::NONE)
                .with_writer(writer);
            if config.timestamps {
                layer.boxed()
            } else {
                layer.without_time().boxed()
            }
        }
    };

    Ok(tracing_subscriber::registry().with(filter).with(layer))
}

fn open_writer(output: &str) -> Result<BoxMakeWriter, SubscriberError> {
    Ok(match output {
        "stdout" => BoxMakeWriter::new(io::stdout),
        "stderr" => BoxMakeWriter::new(io::stderr),
        path => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| SubscriberError::FileOpen {
                    path: path.to_string(),
                    source,
                })?;
            BoxMakeWriter::new(file)
        }
    })
}

fn output_is_terminal(output: &str) -> bool {
    match output {
        "stdout" => io::stdout().is_terminal(),
        "stderr" => io::stderr().is_terminal(),
        _ => false,
    }
}
