use std::env;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{hydrate_env_file, ConfigurationError};

static SUBSCRIBER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Logging options for hosts that let the bootstrap install tracing.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    log_filter: String,
}

impl TelemetryConfig {
    /// Reads `<PREFIX>_LOG_FILTER`, e.g. `RINGCENTRAL_LOG_FILTER`, falling back
    /// to `info`.
    pub fn from_env(prefix: &str) -> Self {
        report_env_file(hydrate_env_file());
        let key = format!("{}_LOG_FILTER", prefix.trim().to_ascii_uppercase());

        let log_filter = env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self { log_filter }
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

/// Installs the global tracing subscriber once per process. Later calls are
/// no-ops, so every entry point may call it unconditionally.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    install_once(&SUBSCRIBER_INSTALLED, config)
}

/// Marks `installed` only after the subscriber is in place, so a failed
/// attempt is reported again on the next call.
fn install_once(
    installed: &OnceCell<()>,
    config: &TelemetryConfig,
) -> Result<(), TelemetryError> {
    installed
        .get_or_try_init(|| {
            let env_filter = EnvFilter::try_new(config.log_filter())
                .map_err(|err| TelemetryError::InvalidLogFilter(err.to_string()))?;

            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_target(true))
                .try_init()
                .map_err(|err| TelemetryError::Tracing(err.to_string()))
        })
        .map(|_| ())
}

fn report_env_file(result: Result<(), ConfigurationError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable .env file");
            false
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    InvalidLogFilter(String),
    #[error("failed to install tracing subscriber: {0}")]
    Tracing(String),
}
