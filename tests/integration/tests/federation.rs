//! User federation integration tests.

use std::collections::BTreeSet;

use kc_federation::{
    CredentialInputUpdater, CredentialInputValidator, StorageId, UserLookupProvider,
    UserModel, UserQueryProvider, UserStorageProvider, USER_STORAGE_SPI,
};
use kc_federation_memory::{MemoryUserStorageProviderFactory, MY_PARAMETER, PROVIDER_ID};
use kc_model::CredentialInput;
use kc_spi::{ComponentFactory, ComponentModel, PropertyType};

use crate::common::TestEnv;

/// Walks the login and admin flows for the three demo users.
#[tokio::test]
async fn test_demo_user_scenario() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let session = env.session();
    let provider = env.provider(&session).await?;
    let realm_id = env.realm_id;

    // Login as user1
    let user1 = provider
        .get_user_by_username(realm_id, "user1")
        .await?
        .ok_or_else(|| anyhow::anyhow!("user1 should exist"))?;
    assert_eq!(user1.first_name(), Some("George"));
    assert_eq!(user1.last_name(), Some("Washington"));
    assert!(
        provider
            .is_valid(realm_id, &user1, &CredentialInput::password("password1"))
            .await?,
        "user1 should log in with password1"
    );
    assert!(
        !provider
            .is_valid(realm_id, &user1, &CredentialInput::password("password2"))
            .await?,
        "user1 should not log in with another user's password"
    );

    // Resolve user2 by storage id
    let user2_id = StorageId::keycloak_id(&env.component.id.to_string(), "user2");
    let user2 = provider
        .get_user_by_id(realm_id, &user2_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user2 should resolve by id"))?;
    assert_eq!(user2.id(), user2_id);
    assert_eq!(user2.email(), Some("user2@example.com"));

    // user3 snapshot carries the creation time in epoch millis
    let user3 = provider
        .get_user_by_username(realm_id, "user3")
        .await?
        .ok_or_else(|| anyhow::anyhow!("user3 should exist"))?
        .to_user();
    assert_eq!(user3.full_name().as_deref(), Some("Franklin Roosevelt"));
    assert_eq!(user3.created_timestamp, Some(1_675_310_400_000));
    assert_eq!(user3.federation_link, Some(env.component.id.to_string()));

    // Password reset is refused and leaves the credential untouched
    let err = provider
        .update_credential(realm_id, &user1, &CredentialInput::password("changed"))
        .await
        .expect_err("password update should be refused");
    assert!(err.is_unsupported_operation());
    assert!(
        provider
            .is_valid(realm_id, &user1, &CredentialInput::password("password1"))
            .await?
    );

    session.close();
    Ok(())
}

/// Tests the admin console listing and search paths.
#[tokio::test]
async fn test_admin_listing_matches_search() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let session = env.session();
    let provider = env.provider(&session).await?;
    let realm_id = env.realm_id;

    assert_eq!(provider.users_count(realm_id).await?, 3);

    for (first, max) in [(0, 100), (0, 1), (1, 1), (2, 10), (10, 20)] {
        let listed: Vec<String> = provider
            .get_users(realm_id, first, max)
            .await?
            .iter()
            .map(|u| u.username().to_string())
            .collect();
        let searched: Vec<String> = provider
            .search_for_user(realm_id, "Washington", first, max)
            .await?
            .iter()
            .map(|u| u.username().to_string())
            .collect();
        assert_eq!(listed, searched, "search should list for first={first} max={max}");
    }

    let everyone = provider.get_all_users(realm_id).await?;
    assert_eq!(everyone.len(), 3);

    assert!(provider
        .get_user_by_email(realm_id, "user1@example.com")
        .await?
        .is_none());

    session.close();
    Ok(())
}

/// Tests that non-password credentials are rejected.
#[tokio::test]
async fn test_other_credential_kinds() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let session = env.session();
    let provider = env.provider(&session).await?;
    let realm_id = env.realm_id;
    let user = provider
        .get_user_by_username(realm_id, "user2")
        .await?
        .ok_or_else(|| anyhow::anyhow!("user2 should exist"))?;

    let otp = CredentialInput::new("otp", "123456");
    let err = provider
        .is_valid(realm_id, &user, &otp)
        .await
        .expect_err("otp validation should be unsupported");
    assert!(err.is_unsupported_operation());
    assert!(!provider.update_credential(realm_id, &user, &otp).await?);

    assert_eq!(
        provider.get_disableable_credential_types(realm_id, &user),
        BTreeSet::from(["password".to_string()])
    );

    session.close();
    Ok(())
}

/// Tests the admin configuration form and component validation.
#[tokio::test]
async fn test_component_configuration() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let session = env.session();

    let properties = env
        .registry
        .get_config_properties(USER_STORAGE_SPI, PROVIDER_ID)
        .ok_or_else(|| anyhow::anyhow!("config properties should be registered"))?;
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, MY_PARAMETER);
    assert_eq!(properties[0].property_type, PropertyType::String);
    assert_eq!(properties[0].default_value.as_deref(), Some("My Value"));

    let input = format!(
        r#"
        name = "Presidents"
        providerId = "{PROVIDER_ID}"
        providerType = "{USER_STORAGE_SPI}"
        parentId = "{}"

        [config]
        myParameter = ["hello"]
        priority = ["5"]
        "#,
        env.realm_id
    );
    let component = ComponentModel::from_toml_str(&input)?;
    env.factory.validate_configuration(&session, &component)?;

    let provider = env.factory.create(&session, &component).await?;
    assert_eq!(provider.provider_config().my_parameter(), Some("hello"));
    assert_eq!(provider.config().priority, 5);
    assert_eq!(provider.config().name, "Presidents");

    let mut blank = component.clone();
    blank.put(MY_PARAMETER, vec![String::new()]);
    assert!(env.factory.validate_configuration(&session, &blank).is_err());

    session.close();
    Ok(())
}

/// Tests that the registry hands out the registered factory.
#[tokio::test]
async fn test_registry_lookup() -> anyhow::Result<()> {
    let env = TestEnv::new();

    assert!(env.registry.has_provider(USER_STORAGE_SPI, PROVIDER_ID));
    assert_eq!(env.registry.list_providers(USER_STORAGE_SPI), [PROVIDER_ID]);
    let found = env
        .registry
        .get_factory::<MemoryUserStorageProviderFactory>(USER_STORAGE_SPI, PROVIDER_ID)
        .ok_or_else(|| anyhow::anyhow!("factory should be registered"))?;
    assert!(std::sync::Arc::ptr_eq(&found, &env.factory));

    let metadata = env
        .registry
        .get_metadata(USER_STORAGE_SPI, PROVIDER_ID)
        .ok_or_else(|| anyhow::anyhow!("metadata should be registered"))?;
    assert_eq!(metadata.id, PROVIDER_ID);

    Ok(())
}
