//! Tracing/logging initialisation shared by every binary built on the framework.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"` or
/// `"table_order=debug,actor_framework=info"`) is used. `json` switches the
/// formatter to one JSON object per line.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
///
/// ```ignore
/// setup_tracing("info", false);
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing already initialised");
    }
}
