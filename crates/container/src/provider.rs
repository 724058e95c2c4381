use std::sync::Arc;

use ringcentral_domain::{
    config::{env_defaults, SECTION},
    ClientFactory, ConfigRepository, ConfigurationError,
};
use tracing::debug;

use crate::{container::Container, holder::ClientHolder};

/// Name the shared client is resolved under.
pub const CLIENT_BINDING: &str = "ringcentral";

/// Wires the RingCentral client into a host [`Container`].
pub struct RingCentralServiceProvider {
    config: Arc<ConfigRepository>,
}

impl RingCentralServiceProvider {
    pub fn new(config: Arc<ConfigRepository>) -> Self {
        Self { config }
    }

    /// Binds [`CLIENT_BINDING`] to a lazy singleton. Nothing is validated
    /// until the binding is first resolved.
    pub fn register(&self, container: &mut Container) {
        let config = Arc::clone(&self.config);
        container.singleton(CLIENT_BINDING, move || {
            ClientFactory::new(config.as_ref()).build()
        });
    }

    /// Merges the environment-backed defaults into the `ringcentral` section.
    /// Values the application already configured take precedence.
    pub fn boot(&self) -> Result<(), ConfigurationError> {
        let defaults = env_defaults()?;
        self.config.merge_from(SECTION, defaults);
        debug!(section = SECTION, "merged packaged ringcentral defaults");
        Ok(())
    }

    /// Stand-alone holder over the same configuration, for callers that do
    /// not go through a container.
    pub fn holder(&self) -> ClientHolder {
        ClientHolder::new(self.config.clone())
    }
}
