use std::{env, sync::Arc, sync::Mutex};

use ringcentral_domain::{
    config::SKIP_DOTENV_VAR, ConfigKey, ConfigRepository, ConfigSource, ConfigurationError,
    RingCentralClient,
};
use serde_json::json;
use strum::IntoEnumIterator;

use crate::{bootstrap, Container, ContainerError, RingCentralServiceProvider, CLIENT_BINDING};

static ENV_GUARD: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::set_var(SKIP_DOTENV_VAR, "1");
    env::set_var("RINGCENTRAL_LOG_FILTER", "warn");
    for key in ConfigKey::iter() {
        env::remove_var(key.env_var());
    }
}

fn set_operator_env() {
    env::set_var("RINGCENTRAL_CLIENT_ID", "env-id");
    env::set_var("RINGCENTRAL_CLIENT_SECRET", "env-secret");
    env::set_var("RINGCENTRAL_SERVER_URL", "https://platform.example");
    env::set_var("RINGCENTRAL_USERNAME", "env-user");
    env::set_var("RINGCENTRAL_OPERATOR_EXTENSION", "101");
    env::set_var("RINGCENTRAL_OPERATOR_PASSWORD", "env-pass");
}

fn build_error(err: ContainerError) -> ConfigurationError {
    match err {
        ContainerError::Build { source, .. } => *source
            .downcast::<ConfigurationError>()
            .expect("configuration error source"),
        other => panic!("unexpected container error: {other}"),
    }
}

#[test]
fn bootstrap_resolves_client_from_environment() {
    let _guard = ENV_GUARD.lock().unwrap();
    clear_env();
    set_operator_env();

    let container = bootstrap(Arc::new(ConfigRepository::new())).expect("bootstrap succeeds");
    assert!(container.bound(CLIENT_BINDING));
    assert!(!container.resolved(CLIENT_BINDING));

    let client = container
        .make::<RingCentralClient>(CLIENT_BINDING)
        .expect("client resolves");
    assert_eq!(client.client_id(), "env-id");
    assert_eq!(client.server_url(), "https://platform.example");
    assert_eq!(client.admin_extension(), None);

    let again = container.make::<RingCentralClient>(CLIENT_BINDING).unwrap();
    assert!(Arc::ptr_eq(&client, &again));

    clear_env();
}

#[test]
fn application_values_override_environment_defaults() {
    let _guard = ENV_GUARD.lock().unwrap();
    clear_env();
    set_operator_env();
    env::set_var("RINGCENTRAL_ADMIN_EXTENSION", "200");

    let config = Arc::new(ConfigRepository::from_value(json!({
        "ringcentral": { "client_id": "app-id", "admin_password": "app-admin" }
    })));
    let container = bootstrap(config.clone()).expect("bootstrap succeeds");

    let client = container.make::<RingCentralClient>(CLIENT_BINDING).unwrap();
    assert_eq!(client.client_id(), "app-id");
    assert_eq!(client.username(), "env-user");
    assert_eq!(client.admin_extension(), Some("200"));
    assert_eq!(client.admin_password(), Some("app-admin"));
    assert!(client.has_admin_credentials());

    clear_env();
}

#[test]
fn unset_environment_reports_first_missing_field() {
    let _guard = ENV_GUARD.lock().unwrap();
    clear_env();

    let container = bootstrap(Arc::new(ConfigRepository::new())).expect("bootstrap succeeds");
    let err = container
        .make::<RingCentralClient>(CLIENT_BINDING)
        .unwrap_err();
    assert_eq!(build_error(err).missing_key(), Some(ConfigKey::ClientId));
    assert!(!container.resolved(CLIENT_BINDING));
}

#[test]
fn registration_without_boot_reports_missing_section() {
    let mut container = Container::new();
    let provider = RingCentralServiceProvider::new(Arc::new(ConfigRepository::new()));
    provider.register(&mut container);

    let err = container
        .make::<RingCentralClient>(CLIENT_BINDING)
        .unwrap_err();
    assert!(matches!(build_error(err), ConfigurationError::MissingSection));
}

#[test]
fn boot_installs_section_with_null_entries() {
    let _guard = ENV_GUARD.lock().unwrap();
    clear_env();

    let config = Arc::new(ConfigRepository::new());
    let provider = RingCentralServiceProvider::new(config.clone());
    provider.boot().expect("boot succeeds");

    assert!(config.has("ringcentral"));
    assert!(config.has("ringcentral.admin_password"));
    assert_eq!(config.get("ringcentral.admin_password"), Some(json!(null)));
}

#[test]
fn provider_holder_shares_configuration() {
    let config = Arc::new(ConfigRepository::from_value(json!({
        "ringcentral": {
            "client_id": "a",
            "client_secret": "b",
            "server_url": "https://x",
            "username": "u",
            "operator_extension": "101",
            "operator_password": "p"
        }
    })));
    let holder = RingCentralServiceProvider::new(config).holder();
    let client = holder.get().expect("client builds");
    assert_eq!(client.username(), "u");
    assert!(Arc::ptr_eq(&client, &holder.get().unwrap()));
}
