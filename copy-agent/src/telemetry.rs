//! Logging initialization

use crate::config::TelemetryConfig;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize console logging once per process.
///
/// `RUST_LOG` wins over the configured level when set. Later calls are no-ops.
pub fn init_telemetry(config: &TelemetryConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(config.log_level.to_lowercase()))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let initialized = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .try_init();

        if initialized.is_ok() {
            tracing::info!(service.name = %config.service_name, "Telemetry initialized");
        }
    });
}
