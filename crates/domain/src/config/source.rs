use serde_json::Value;

/// Raw configuration value as stored by the host.
pub type ConfigValue = Value;

/// Read-only key-value store addressed by dotted paths (`section.key`).
pub trait ConfigSource: Send + Sync {
    /// Returns `true` if every segment of `path` resolves, even when the leaf
    /// is `null`.
    fn has(&self, path: &str) -> bool;

    /// Returns the value stored at `path`, if any.
    fn get(&self, path: &str) -> Option<ConfigValue>;
}

/// Emptiness used for presence checks.
///
/// `null`, whitespace-only strings, `false`, `[]` and `{}` are empty. Numbers
/// never are, so an extension configured as `0` still counts as present.
pub fn is_empty_value(value: &ConfigValue) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(_) => false,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}
