//! End-to-end indirection flow over the in-memory backend: externalize a
//! set of entity fields, persist the references, resolve them back.

use std::time::Duration;

use secretref::{
    build_secrets_manager, ExternalSecretsManager, InMemorySecretStore, SecretsConfig,
    SecretsManager, SecretsProvider,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::test]
async fn externalize_and_resolve_entity_fields() {
    init_tracing();
    let manager = ExternalSecretsManager::new(InMemorySecretStore::new(), Duration::ZERO);

    // A migration pass externalizing the credential fields of one entity.
    let fields = [
        ("password", "db-pass-1"),
        ("apiKey", "key-abc"),
        ("webhookSecret", "whsec-9"),
    ];

    let mut persisted = Vec::new();
    for (field, value) in fields {
        let reference = manager
            .store_value(field, value, "platform.service-conn", true)
            .await
            .unwrap();
        persisted.push(reference);
    }

    assert_eq!(
        persisted,
        vec![
            "secret:platform.service-conn.password",
            "secret:platform.service-conn.apikey",
            "secret:platform.service-conn.webhooksecret",
        ]
    );

    // Read side: every persisted reference resolves to the original value.
    for ((_, value), reference) in fields.iter().zip(&persisted) {
        let resolved = manager.resolve_value(reference).await.unwrap();
        assert_eq!(resolved.expose_secret(), *value);
    }
}

#[tokio::test]
async fn rerunning_migration_is_idempotent() {
    init_tracing();
    let manager = ExternalSecretsManager::new(InMemorySecretStore::new(), Duration::ZERO);

    let first = manager
        .store_value("password", "db-pass-1", "platform.service-conn", true)
        .await
        .unwrap();

    // Second pass sees the stored reference instead of the plaintext and
    // must not double-wrap or touch the backend again.
    let second = manager
        .store_value("password", &first, "platform.service-conn", true)
        .await
        .unwrap();
    assert_eq!(first, second);

    // A changed plaintext for the same field updates in place.
    let third = manager
        .store_value("password", "db-pass-2", "platform.service-conn", true)
        .await
        .unwrap();
    assert_eq!(first, third);
    let resolved = manager.resolve_value(&third).await.unwrap();
    assert_eq!(resolved.expose_secret(), "db-pass-2");
}

#[tokio::test]
async fn factory_selects_provider_from_config() {
    let config = SecretsConfig::new(SecretsProvider::InMemory);
    let manager = build_secrets_manager(&config).await.unwrap();

    let reference = manager
        .store_value("token", "t-123", "platform.pipeline", true)
        .await
        .unwrap();
    assert!(reference.starts_with(secretref::SECRET_PREFIX));

    let resolved = manager.resolve_value(&reference).await.unwrap();
    assert_eq!(resolved.expose_secret(), "t-123");
}

#[tokio::test]
async fn inline_provider_leaves_values_untouched() {
    let config = SecretsConfig::new(SecretsProvider::Db);
    let manager = build_secrets_manager(&config).await.unwrap();

    let stored = manager
        .store_value("password", "db-pass-1", "platform.service-conn", true)
        .await
        .unwrap();
    assert_eq!(stored, "db-pass-1");
}
