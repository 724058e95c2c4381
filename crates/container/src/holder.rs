use std::sync::Arc;

use once_cell::sync::OnceCell;
use ringcentral_domain::{ClientFactory, ConfigSource, ConfigurationError, RingCentralClient};

/// Explicitly owned, lazily initialised RingCentral client.
///
/// The first successful [`get`](Self::get) builds the client; concurrent first
/// callers block until it is ready and all observe the same instance. A failed
/// build is not cached, so a corrected configuration is picked up on the next
/// call.
pub struct ClientHolder {
    source: Arc<dyn ConfigSource>,
    client: OnceCell<Arc<RingCentralClient>>,
}

impl ClientHolder {
    pub fn new(source: Arc<dyn ConfigSource>) -> Self {
        Self {
            source,
            client: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<Arc<RingCentralClient>, ConfigurationError> {
        self.client
            .get_or_try_init(|| {
                ClientFactory::new(self.source.as_ref())
                    .build()
                    .map(Arc::new)
            })
            .cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }
}
