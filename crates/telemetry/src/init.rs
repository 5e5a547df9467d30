// Path: crates/telemetry/src/init.rs
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// The filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes the global `tracing` subscriber for structured JSON logging.
///
/// Records emitted through the `log` facade by the library crates are bridged
/// into the same subscriber. The filter is read from `RUST_LOG`, defaulting to
/// [`DEFAULT_FILTER`].
pub fn init_tracing() -> Result<(), anyhow::Error> {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_tracing`], with `default_filter` used when `RUST_LOG` is unset,
/// e.g. `"warn,chainlens_services=debug"` to trace resolution branches only.
///
/// Fails if a global subscriber or `log` bridge is already installed.
pub fn init_tracing_with(default_filter: &str) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;
    let fmt_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
