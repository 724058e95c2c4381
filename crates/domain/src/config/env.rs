//! Packaged defaults: every known key falls back to a `RINGCENTRAL_*`
//! environment variable, optionally hydrated from a `.env` file.

use std::env;

use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use super::{ConfigKey, ConfigValue, ConfigurationError};

/// Set to any value to skip reading `.env` (tests, containers).
pub const SKIP_DOTENV_VAR: &str = "RINGCENTRAL_SKIP_DOTENV";

pub fn hydrate_env_file() -> Result<(), ConfigurationError> {
    if env::var_os(SKIP_DOTENV_VAR).is_some() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(ConfigurationError::Dotenv { source: err }),
    }

    Ok(())
}

/// Builds the packaged `ringcentral` section. Keys whose variable is unset map
/// to `null`, so the section always exists once merged.
pub fn env_defaults() -> Result<ConfigValue, ConfigurationError> {
    hydrate_env_file()?;

    let section: Map<String, Value> = ConfigKey::iter()
        .map(|key| {
            let value = env::var(key.env_var()).map_or(Value::Null, Value::String);
            (key.as_str().to_string(), value)
        })
        .collect();

    Ok(Value::Object(section))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_GUARD: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::set_var(SKIP_DOTENV_VAR, "1");
        for key in ConfigKey::iter() {
            env::remove_var(key.env_var());
        }
    }

    #[test]
    fn unset_variables_become_null() {
        let _guard = ENV_GUARD.lock().unwrap();
        clear_env();
        env::set_var("RINGCENTRAL_CLIENT_ID", "from-env");

        let defaults = env_defaults().expect("defaults load");
        assert_eq!(defaults["client_id"], Value::String("from-env".into()));
        assert_eq!(defaults["admin_password"], Value::Null);
        assert_eq!(defaults.as_object().map(Map::len), Some(8));

        clear_env();
    }

    #[test]
    fn skip_flag_bypasses_dotenv() {
        let _guard = ENV_GUARD.lock().unwrap();
        clear_env();
        assert!(hydrate_env_file().is_ok());
    }
}
