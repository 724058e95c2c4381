//! Configuration model for the `ringcentral` section: key sets, the dotted-path
//! source abstraction, the in-memory repository and environment defaults.

mod env;
mod keys;
mod repository;
mod source;

use std::path::PathBuf;

use thiserror::Error;

pub use env::{env_defaults, hydrate_env_file, SKIP_DOTENV_VAR};
pub use keys::{ConfigKey, OPTIONAL_KEYS, REQUIRED_KEYS, SECTION};
pub use repository::ConfigRepository;
pub use source::{is_empty_value, ConfigSource, ConfigValue};

/// Errors raised while loading configuration or building a client from it.
/// Each variant names exactly one unmet requirement.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("missing configuration section")]
    MissingSection,
    #[error("missing {key}")]
    MissingField { key: ConfigKey },
    #[error("unsupported value for `{key}`: expected a string or number")]
    InvalidValue { key: ConfigKey },
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("failed to read configuration file `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load .env file: {source}")]
    Dotenv {
        #[from]
        source: dotenvy::Error,
    },
}

impl ConfigurationError {
    /// The field this error reports as missing, if any.
    pub fn missing_key(&self) -> Option<ConfigKey> {
        match self {
            Self::MissingField { key } => Some(*key),
            _ => None,
        }
    }
}
