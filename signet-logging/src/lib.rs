//! Structured logging setup for Signet components.
//!
//! Library code only emits `tracing` events; binaries and embedding services
//! pick the output format here. `SIGNET_LOG_FORMAT=json` switches the console
//! default to JSON lines.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for terminals.
    Console,
    /// One JSON object per line, for log shippers.
    Json,
}

impl LogFormat {
    /// Read the format from `SIGNET_LOG_FORMAT`, defaulting to console output.
    pub fn from_env() -> Self {
        match std::env::var("SIGNET_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Console,
        }
    }
}

/// Initialize the global tracing subscriber for a Signet component.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_level`.
/// Panics if a global subscriber is already installed.
pub fn init(component: &str, default_level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .init();
        }
        LogFormat::Console => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(true))
                .init();
        }
    }

    tracing::debug!(component = component, "Logging initialized");
}

/// Convenience wrapper: format from the environment, `info` default level.
pub fn init_from_env(component: &str) {
    init(component, "info", LogFormat::from_env());
}
