//! Fixed key sets of the `ringcentral` configuration section.

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Top-level namespace every key lives under.
pub const SECTION: &str = "ringcentral";

/// Keys recognised inside the [`SECTION`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigKey {
    ClientId,
    ClientSecret,
    ServerUrl,
    Username,
    OperatorExtension,
    OperatorPassword,
    AdminExtension,
    AdminPassword,
}

/// Mandatory keys. Validation walks them in this exact order and stops at the
/// first one missing, so the order decides which error is reported.
pub const REQUIRED_KEYS: [ConfigKey; 6] = [
    ConfigKey::ClientId,
    ConfigKey::ClientSecret,
    ConfigKey::ServerUrl,
    ConfigKey::Username,
    ConfigKey::OperatorExtension,
    ConfigKey::OperatorPassword,
];

/// Keys attached to the client only when present and non-empty.
pub const OPTIONAL_KEYS: [ConfigKey; 2] = [ConfigKey::AdminExtension, ConfigKey::AdminPassword];

impl ConfigKey {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_required(self) -> bool {
        REQUIRED_KEYS.contains(&self)
    }

    /// Dotted lookup path, e.g. `ringcentral.client_id`.
    pub fn path(self) -> String {
        format!("{SECTION}.{}", self.as_str())
    }

    /// Environment variable backing the packaged default, e.g.
    /// `RINGCENTRAL_CLIENT_ID`.
    pub fn env_var(self) -> String {
        format!("{SECTION}_{}", self.as_str()).to_ascii_uppercase()
    }
}
