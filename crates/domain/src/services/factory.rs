//! Turns a validated configuration source into a [`RingCentralClient`].

use metrics::counter;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::{ConfigKey, ConfigSource, ConfigValue, ConfigurationError};
use crate::model::RingCentralClient;

use super::validator::ConfigValidator;

/// Resolved values for every key that was present. Exists only while a
/// client is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub server_url: String,
    pub username: String,
    pub operator_extension: String,
    pub operator_password: String,
    pub admin_extension: Option<String>,
    pub admin_password: Option<String>,
}

impl ClientConfig {
    /// Reads every known key through `validator`. Mandatory keys are expected
    /// to have been checked already; a gap still surfaces as `MissingField`.
    /// An optional key that is neither text nor a number is skipped.
    pub fn resolve<S>(validator: &ConfigValidator<'_, S>) -> Result<Self, ConfigurationError>
    where
        S: ConfigSource + ?Sized,
    {
        let text = |key: ConfigKey| -> Result<Option<String>, ConfigurationError> {
            validator
                .value(key)
                .map(|value| scalar_text(key, value))
                .transpose()
        };
        let required = |key: ConfigKey| -> Result<String, ConfigurationError> {
            text(key)?.ok_or(ConfigurationError::MissingField { key })
        };
        let optional = |key: ConfigKey| -> Option<String> {
            text(key).unwrap_or_else(|err| {
                debug!(key = key.as_str(), error = %err, "skipping optional ringcentral key");
                None
            })
        };

        Ok(Self {
            client_id: required(ConfigKey::ClientId)?,
            client_secret: required(ConfigKey::ClientSecret)?,
            server_url: required(ConfigKey::ServerUrl)?,
            username: required(ConfigKey::Username)?,
            operator_extension: required(ConfigKey::OperatorExtension)?,
            operator_password: required(ConfigKey::OperatorPassword)?,
            admin_extension: optional(ConfigKey::AdminExtension),
            admin_password: optional(ConfigKey::AdminPassword),
        })
    }

    pub fn into_client(self) -> Result<RingCentralClient, ConfigurationError> {
        let mut builder = RingCentralClient::builder()
            .client_id(self.client_id)
            .client_secret(self.client_secret)
            .server_url(self.server_url)
            .username(self.username)
            .operator_extension(self.operator_extension)
            .operator_password(self.operator_password);

        if let Some(extension) = self.admin_extension {
            builder = builder.admin_extension(extension);
        }
        if let Some(password) = self.admin_password {
            builder = builder.admin_password(password);
        }

        builder.build()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

fn scalar_text(key: ConfigKey, value: ConfigValue) -> Result<String, ConfigurationError> {
    match serde_json::from_value::<Scalar>(value) {
        Ok(Scalar::Text(text)) => Ok(text),
        Ok(Scalar::Number(number)) => Ok(number.to_string()),
        Err(_) => Err(ConfigurationError::InvalidValue { key }),
    }
}

/// Builds clients from a configuration source. Performs no I/O beyond the
/// in-memory lookups; credentials are checked for presence only.
pub struct ClientFactory<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> ClientFactory<'a, S>
where
    S: ConfigSource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub fn build(&self) -> Result<RingCentralClient, ConfigurationError> {
        match self.try_build() {
            Ok(client) => {
                counter!("ringcentral_client_builds_total", "outcome" => "ok").increment(1);
                info!(
                    server_url = client.server_url(),
                    admin = client.has_admin_credentials(),
                    "ringcentral client configured"
                );
                Ok(client)
            }
            Err(err) => {
                counter!("ringcentral_client_builds_total", "outcome" => "error").increment(1);
                warn!(error = %err, "ringcentral configuration rejected");
                Err(err)
            }
        }
    }

    fn try_build(&self) -> Result<RingCentralClient, ConfigurationError> {
        let validator = ConfigValidator::new(self.source);
        validator.ensure_required()?;
        ClientConfig::resolve(&validator)?.into_client()
    }
}
