//! Factory for the memory storage provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use kc_federation::config::FederationConfig;
use kc_federation::provider::{UserStorageProviderFactory, UserStorageSpi};
use kc_spi::{
    ComponentFactory, ComponentModel, FactoryConfig, KeycloakSession, ProviderConfigProperty,
    ProviderFactory, ProviderMetadata, ServerInfoAwareProviderFactory, SpiError, SpiRegistry,
};

use crate::config::{ProviderConfig, MY_PARAMETER};
use crate::metadata;
use crate::provider::MemoryUserStorageProvider;
use crate::server_info::PropertiesServerInfoDelegate;

/// Provider id under which the factory registers.
pub const PROVIDER_ID: &str = "bekwam-keycloak-storage-spi-hw";

/// Factory init key naming an on-disk info resource.
pub const INFO_PATH: &str = "infoPath";

const HELP_TEXT: &str = "Read-only demonstration store holding three fixed users";

/// Creates [`MemoryUserStorageProvider`] instances.
///
/// The factory is a process-wide singleton; it holds no per-realm state and
/// builds a fresh provider for every [`create`](ComponentFactory::create).
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStorageProviderFactory {
    server_info: PropertiesServerInfoDelegate,
}

impl MemoryUserStorageProviderFactory {
    /// Creates a factory that publishes the bundled info resource.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with an explicit server info source.
    #[must_use]
    pub const fn with_server_info(server_info: PropertiesServerInfoDelegate) -> Self {
        Self { server_info }
    }

    /// Returns the server info delegate.
    #[must_use]
    pub const fn server_info(&self) -> &PropertiesServerInfoDelegate {
        &self.server_info
    }
}

#[async_trait]
impl ProviderFactory for MemoryUserStorageProviderFactory {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            id: PROVIDER_ID,
            name: "Memory User Storage",
            description: HELP_TEXT,
            priority: 0,
        }
    }

    async fn init(&mut self, config: &dyn FactoryConfig) -> Result<(), SpiError> {
        if let Some(path) = config.get(INFO_PATH) {
            if path.trim().is_empty() {
                return Err(SpiError::InitializationFailed(format!(
                    "{INFO_PATH} must not be blank"
                )));
            }
            tracing::debug!(path, "Using on-disk server info resource");
            self.server_info = PropertiesServerInfoDelegate::from_path(path);
        }
        Ok(())
    }
}

#[async_trait]
impl ComponentFactory<MemoryUserStorageProvider> for MemoryUserStorageProviderFactory {
    async fn create(
        &self,
        session: &KeycloakSession,
        component: &ComponentModel,
    ) -> Result<MemoryUserStorageProvider, SpiError> {
        tracing::trace!(
            session_id = %session.id(),
            component_id = %component.id,
            realm_id = ?session.realm_id(),
            "Creating memory user storage provider"
        );
        self.check_component(component)?;

        let federation_config = FederationConfig::from_component(component)?;
        let config = ProviderConfig::from_component(component);

        Ok(MemoryUserStorageProvider::new(
            session.id(),
            federation_config,
            config,
        ))
    }

    fn config_properties(&self) -> &[ProviderConfigProperty] {
        metadata::config_properties()
    }

    fn help_text(&self) -> &'static str {
        HELP_TEXT
    }

    fn validate_configuration(
        &self,
        _session: &KeycloakSession,
        component: &ComponentModel,
    ) -> Result<(), SpiError> {
        self.check_component(component)?;
        FederationConfig::from_component(component)?;

        if component.contains(MY_PARAMETER)
            && component
                .get_first(MY_PARAMETER)
                .map_or(true, |value| value.trim().is_empty())
        {
            return Err(SpiError::Configuration(format!(
                "{MY_PARAMETER} must not be blank"
            )));
        }
        Ok(())
    }
}

impl ServerInfoAwareProviderFactory for MemoryUserStorageProviderFactory {
    fn operational_info(&self) -> HashMap<String, String> {
        self.server_info.properties()
    }
}

impl UserStorageProviderFactory<MemoryUserStorageProvider> for MemoryUserStorageProviderFactory {}

/// Registers a factory with the user storage SPI.
///
/// Call [`ProviderFactory::init`] on the factory first; the registry keeps
/// it behind an [`Arc`].
pub fn register(
    registry: &SpiRegistry,
    factory: MemoryUserStorageProviderFactory,
) -> Arc<MemoryUserStorageProviderFactory> {
    registry.register_server_info_aware::<MemoryUserStorageProvider, _>(&UserStorageSpi, factory)
}

#[cfg(test)]
mod tests {
    use kc_federation::USER_STORAGE_SPI;
    use uuid::Uuid;

    use super::*;

    fn component() -> ComponentModel {
        ComponentModel::new("Demo", PROVIDER_ID, USER_STORAGE_SPI, Uuid::now_v7())
    }

    fn session() -> KeycloakSession {
        KeycloakSession::new(Arc::new(SpiRegistry::new()))
    }

    #[tokio::test]
    async fn creates_provider_for_component() {
        let factory = MemoryUserStorageProviderFactory::new();
        let session = session();
        let component = component().with_config(MY_PARAMETER, "custom");

        let provider = factory.create(&session, &component).await.unwrap();

        assert_eq!(provider.session_id(), session.id());
        assert_eq!(provider.component_id(), component.id);
        assert_eq!(provider.provider_config().my_parameter(), Some("custom"));
        session.close();
    }

    #[tokio::test]
    async fn every_create_builds_a_new_provider() {
        let factory = MemoryUserStorageProviderFactory::new();
        let first_session = session();
        let second_session = session();
        let component = component();

        let a = factory.create(&first_session, &component).await.unwrap();
        let b = factory.create(&second_session, &component).await.unwrap();

        assert_ne!(a.session_id(), b.session_id());
        first_session.close();
        second_session.close();
    }

    #[tokio::test]
    async fn accepts_component_stored_under_registered_id() {
        let factory = MemoryUserStorageProviderFactory::new();
        let session = session();
        let realm_id = Uuid::now_v7();
        let stored = ComponentModel::new(
            "Demo",
            "bekwam-keycloak-storage-spi-hw",
            USER_STORAGE_SPI,
            realm_id,
        );

        factory.validate_configuration(&session, &stored).unwrap();
        let provider = factory.create(&session, &stored).await.unwrap();

        assert_eq!(provider.component_id(), stored.id);
        session.close();
    }

    #[tokio::test]
    async fn rejects_foreign_components() {
        let factory = MemoryUserStorageProviderFactory::new();
        let session = session();
        let foreign = ComponentModel::new("LDAP", "ldap", USER_STORAGE_SPI, Uuid::now_v7());

        let err = factory.create(&session, &foreign).await.unwrap_err();

        assert!(matches!(err, SpiError::Configuration(_)));
        session.close();
    }

    #[test]
    fn validates_parameter() {
        let factory = MemoryUserStorageProviderFactory::new();
        let session = session();

        assert!(factory.validate_configuration(&session, &component()).is_ok());
        assert!(factory
            .validate_configuration(&session, &component().with_config(MY_PARAMETER, "value"))
            .is_ok());
        assert!(factory
            .validate_configuration(&session, &component().with_config(MY_PARAMETER, "  "))
            .is_err());

        let mut empty = component();
        empty.put(MY_PARAMETER, Vec::new());
        assert!(factory.validate_configuration(&session, &empty).is_err());

        assert!(factory
            .validate_configuration(&session, &component().with_config("priority", "high"))
            .is_err());
        session.close();
    }

    #[test]
    fn describes_itself() {
        let factory = MemoryUserStorageProviderFactory::new();

        assert_eq!(factory.id(), "bekwam-keycloak-storage-spi-hw");
        assert_eq!(factory.metadata().id, PROVIDER_ID);
        assert!(!factory.help_text().is_empty());
        assert_eq!(factory.config_properties().len(), 1);
        assert_eq!(factory.config_properties()[0].name, MY_PARAMETER);
    }

    #[tokio::test]
    async fn init_switches_server_info_source() {
        let mut factory = MemoryUserStorageProviderFactory::new();
        let config = HashMap::from([(INFO_PATH.to_string(), "/nonexistent/info.properties".to_string())]);

        factory.init(&config).await.unwrap();

        assert_eq!(
            factory.server_info(),
            &PropertiesServerInfoDelegate::from_path("/nonexistent/info.properties")
        );
        assert!(factory.operational_info().is_empty());
    }

    #[tokio::test]
    async fn init_rejects_blank_path() {
        let mut factory = MemoryUserStorageProviderFactory::new();
        let config = HashMap::from([(INFO_PATH.to_string(), " ".to_string())]);

        assert!(factory.init(&config).await.is_err());
    }

    #[tokio::test]
    async fn init_without_path_keeps_bundled_info() {
        let mut factory = MemoryUserStorageProviderFactory::new();

        factory.init(&HashMap::new()).await.unwrap();

        let info = factory.operational_info();
        assert_eq!(info.get("name").map(String::as_str), Some(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn registers_with_user_storage_spi() {
        let registry = SpiRegistry::new();

        let handle = register(&registry, MemoryUserStorageProviderFactory::new());

        assert!(registry.has_provider(USER_STORAGE_SPI, PROVIDER_ID));
        assert!(registry.creates::<MemoryUserStorageProvider>(USER_STORAGE_SPI, PROVIDER_ID));
        let found = registry
            .get_factory::<MemoryUserStorageProviderFactory>(USER_STORAGE_SPI, PROVIDER_ID)
            .unwrap();
        assert!(Arc::ptr_eq(&handle, &found));
        assert!(registry.operational_info(USER_STORAGE_SPI, PROVIDER_ID).is_some());
    }
}
