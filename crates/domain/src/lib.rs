//! Configuration validation and construction of the shared RingCentral client.
//!
//! The crate reads the `ringcentral` section of a host configuration source,
//! checks the mandatory credentials in a fixed order and assembles an
//! immutable [`RingCentralClient`]. Caching the result as a process-wide
//! singleton is left to `ringcentral_container`.

pub mod config;
pub mod model;
pub mod services;

pub use config::{ConfigKey, ConfigRepository, ConfigSource, ConfigValue, ConfigurationError};
pub use model::{RingCentralClient, RingCentralClientBuilder};
pub use services::{ClientConfig, ClientFactory, ConfigValidator};
