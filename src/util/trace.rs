//! Installs a `tracing_subscriber` registry for the binary when
//! the `tracing` feature is enabled. Records emitted through the
//! `log` facade are bridged into the same subscriber.
//!
//! Verbosity follows `RUST_LOG`, for example:
//! ```bash
//! RUST_LOG=tripfare=debug tripfare pings.csv fares.csv
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// Not calling this function will simply not emit spans.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_thread_names(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
