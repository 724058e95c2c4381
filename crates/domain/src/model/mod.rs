//! The RingCentral client handle produced by the bootstrap.

use std::fmt;

use crate::config::{ConfigKey, ConfigurationError};

/// Fully configured RingCentral client. Every mandatory credential is
/// guaranteed non-empty; admin credentials are present only when configured.
#[derive(Clone, PartialEq, Eq)]
pub struct RingCentralClient {
    client_id: String,
    client_secret: String,
    server_url: String,
    username: String,
    operator_extension: String,
    operator_password: String,
    admin_extension: Option<String>,
    admin_password: Option<String>,
}

impl RingCentralClient {
    pub fn builder() -> RingCentralClientBuilder {
        RingCentralClientBuilder::new()
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn operator_extension(&self) -> &str {
        &self.operator_extension
    }

    pub fn operator_password(&self) -> &str {
        &self.operator_password
    }

    pub fn admin_extension(&self) -> Option<&str> {
        self.admin_extension.as_deref()
    }

    pub fn admin_password(&self) -> Option<&str> {
        self.admin_password.as_deref()
    }

    pub fn has_admin_credentials(&self) -> bool {
        self.admin_extension.is_some() && self.admin_password.is_some()
    }
}

impl fmt::Debug for RingCentralClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingCentralClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("operator_extension", &self.operator_extension)
            .field("operator_password", &"<redacted>")
            .field("admin_extension", &self.admin_extension)
            .field(
                "admin_password",
                &self.admin_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// By-value builder for [`RingCentralClient`].
#[derive(Default, Clone)]
pub struct RingCentralClientBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    server_url: Option<String>,
    username: Option<String>,
    operator_extension: Option<String>,
    operator_password: Option<String>,
    admin_extension: Option<String>,
    admin_password: Option<String>,
}

impl RingCentralClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_id(mut self, value: impl Into<String>) -> Self {
        self.client_id = Some(value.into());
        self
    }

    pub fn client_secret(mut self, value: impl Into<String>) -> Self {
        self.client_secret = Some(value.into());
        self
    }

    pub fn server_url(mut self, value: impl Into<String>) -> Self {
        self.server_url = Some(value.into());
        self
    }

    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    pub fn operator_extension(mut self, value: impl Into<String>) -> Self {
        self.operator_extension = Some(value.into());
        self
    }

    pub fn operator_password(mut self, value: impl Into<String>) -> Self {
        self.operator_password = Some(value.into());
        self
    }

    pub fn admin_extension(mut self, value: impl Into<String>) -> Self {
        self.admin_extension = Some(value.into());
        self
    }

    pub fn admin_password(mut self, value: impl Into<String>) -> Self {
        self.admin_password = Some(value.into());
        self
    }

    /// Finishes the client, reporting the first unset mandatory field in
    /// declaration order. Blank values count as unset; others are stored as given.
    pub fn build(self) -> Result<RingCentralClient, ConfigurationError> {
        Ok(RingCentralClient {
            client_id: required(self.client_id, ConfigKey::ClientId)?,
            client_secret: required(self.client_secret, ConfigKey::ClientSecret)?,
            server_url: required(self.server_url, ConfigKey::ServerUrl)?,
            username: required(self.username, ConfigKey::Username)?,
            operator_extension: required(self.operator_extension, ConfigKey::OperatorExtension)?,
            operator_password: required(self.operator_password, ConfigKey::OperatorPassword)?,
            admin_extension: optional(self.admin_extension),
            admin_password: optional(self.admin_password),
        })
    }
}

fn required(value: Option<String>, key: ConfigKey) -> Result<String, ConfigurationError> {
    optional(value).ok_or(ConfigurationError::MissingField { key })
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
