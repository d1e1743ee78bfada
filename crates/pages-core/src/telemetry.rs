//! Console tracing for native hosts.
//!
//! ```ignore
//! pages_core::telemetry::init(TelemetryConfig::from_env("pages-app"));
//! tracing::info!("started");
//! ```

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to startup logs.
    pub service_name: String,
    /// Console log level (default: INFO, DEBUG in debug builds)
    pub console_level: Level,
}

impl TelemetryConfig {
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let console_level = std::env::var("RUST_LOG_LEVEL")
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            });

        Self {
            service_name: service_name.into(),
            console_level,
        }
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.console_level.as_str().to_ascii_lowercase()));

    let console = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry().with(console).try_init().is_ok() {
        tracing::info!(service = %config.service_name, "telemetry initialised");
    }
}
