//! Telemetry for Vox
//!
//! Structured logging via the `tracing` ecosystem. The relay has no
//! exporter backends; log output goes to the fmt layer.

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the provided default filter.
pub fn init(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
