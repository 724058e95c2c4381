//! Registration glue that exposes the RingCentral client as a process-wide
//! singleton, either through a named [`Container`] binding or an explicitly
//! passed [`ClientHolder`].

mod container;
mod holder;
mod provider;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use ringcentral_domain::{
    services::telemetry::{init_telemetry, TelemetryConfig, TelemetryError},
    ConfigRepository, ConfigurationError,
};
use thiserror::Error;

pub use container::{BoxError, Container, ContainerError};
pub use holder::ClientHolder;
pub use provider::{RingCentralServiceProvider, CLIENT_BINDING};

/// Installs logging, registers the provider and merges its defaults. The
/// client itself is built on first `make(CLIENT_BINDING)`.
pub fn bootstrap(config: Arc<ConfigRepository>) -> Result<Container, BootstrapError> {
    init_telemetry(&TelemetryConfig::from_env("RINGCENTRAL"))?;

    let provider = RingCentralServiceProvider::new(config);
    let mut container = Container::new();
    provider.register(&mut container);
    provider.boot()?;

    Ok(container)
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("config error: {0}")]
    Config(#[from] ConfigurationError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
}
