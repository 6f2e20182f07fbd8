//! Tracing setup for the khazanah binaries.
//!
//! # Usage
//!
//! ```ignore
//! use khazanah_common::telemetry::{self, TelemetryConfig};
//!
//! fn main() {
//!     telemetry::init_tracing(TelemetryConfig::from_env("khazanah").verbose(true));
//!     tracing::info!("started");
//! }
//! ```

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name, logged once at startup.
    pub service_name: String,
    /// Console log level when `RUST_LOG` is unset.
    pub console_level: Level,
}

impl TelemetryConfig {
    /// Load config from environment variables.
    ///
    /// - `RUST_LOG`: Standard env filter (optional, overrides console_level)
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            console_level: Level::INFO,
        }
    }

    /// Raise the default level to DEBUG.
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.console_level = Level::DEBUG;
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.console_level.as_str().to_lowercase()))
    }
}

/// Install the console subscriber. Logs go to stderr so stdout stays clean
/// for rendered output.
///
/// Call once at startup; later calls are ignored.
pub fn init_tracing(config: TelemetryConfig) {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_filter(config.env_filter());

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(service = %config.service_name, "telemetry initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_level() {
        let config = TelemetryConfig::from_env("khazanah");
        assert_eq!(config.console_level, Level::INFO);
        assert_eq!(config.verbose(true).console_level, Level::DEBUG);
    }
}
