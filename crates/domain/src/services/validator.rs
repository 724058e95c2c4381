//! Presence checks over the `ringcentral` section of a [`ConfigSource`].

use crate::config::{
    is_empty_value, ConfigKey, ConfigSource, ConfigValue, ConfigurationError, REQUIRED_KEYS,
    SECTION,
};

/// Read-only view answering "is this key usable?" for one configuration
/// source. Absence is never an error here; callers decide what it means.
pub struct ConfigValidator<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> ConfigValidator<'a, S>
where
    S: ConfigSource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub fn has_section(&self) -> bool {
        self.source.has(SECTION)
    }

    /// `true` iff the section exists and `key` holds a non-empty value.
    pub fn has(&self, key: ConfigKey) -> bool {
        self.value(key).is_some()
    }

    pub fn missing(&self, key: ConfigKey) -> bool {
        !self.has(key)
    }

    /// The raw value behind `key`, filtered by the same rules as [`has`].
    ///
    /// [`has`]: Self::has
    pub fn value(&self, key: ConfigKey) -> Option<ConfigValue> {
        if !self.has_section() {
            return None;
        }
        let path = key.path();
        if !self.source.has(&path) {
            return None;
        }
        self.source
            .get(&path)
            .filter(|value| !is_empty_value(value))
    }

    /// Checks the section, then every mandatory key in declaration order,
    /// stopping at the first one missing.
    pub fn ensure_required(&self) -> Result<(), ConfigurationError> {
        if !self.has_section() {
            return Err(ConfigurationError::MissingSection);
        }
        match REQUIRED_KEYS.into_iter().find(|key| self.missing(*key)) {
            Some(key) => Err(ConfigurationError::MissingField { key }),
            None => Ok(()),
        }
    }
}
