//! Common test utilities and fixtures.

use std::sync::Arc;

use kc_federation::USER_STORAGE_SPI;
use kc_federation_memory::{
    register, MemoryUserStorageProvider, MemoryUserStorageProviderFactory, PROVIDER_ID,
};
use kc_spi::{ComponentFactory, ComponentModel, KeycloakSession, SpiRegistry};
use uuid::Uuid;

/// Test environment holding a registry with the memory factory installed.
pub struct TestEnv {
    /// Registry the factory was registered with.
    pub registry: Arc<SpiRegistry>,
    /// Shared factory handle kept by the registry.
    pub factory: Arc<MemoryUserStorageProviderFactory>,
    /// Realm the component belongs to.
    pub realm_id: Uuid,
    /// Component the tests create providers for.
    pub component: ComponentModel,
}

impl TestEnv {
    /// Creates an environment around a default factory.
    pub fn new() -> Self {
        Self::with_factory(MemoryUserStorageProviderFactory::new())
    }

    /// Creates an environment around an already initialised factory.
    pub fn with_factory(factory: MemoryUserStorageProviderFactory) -> Self {
        // Initialize tracing for tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter("kc_federation_memory=trace,kc_spi=debug")
            .with_test_writer()
            .try_init();

        let registry = Arc::new(SpiRegistry::new());
        let factory = register(&registry, factory);
        let realm_id = Uuid::now_v7();
        let component = ComponentModel::new("Demo users", PROVIDER_ID, USER_STORAGE_SPI, realm_id);

        Self {
            registry,
            factory,
            realm_id,
            component,
        }
    }

    /// Opens a session bound to the test realm.
    pub fn session(&self) -> KeycloakSession {
        KeycloakSession::for_realm(Arc::clone(&self.registry), self.realm_id)
    }

    /// Creates a provider the way the host does, through the registry.
    pub async fn provider(
        &self,
        session: &KeycloakSession,
    ) -> anyhow::Result<MemoryUserStorageProvider> {
        let factory = session
            .registry()
            .get_factory::<MemoryUserStorageProviderFactory>(USER_STORAGE_SPI, PROVIDER_ID)
            .ok_or_else(|| anyhow::anyhow!("memory factory is not registered"))?;
        Ok(factory.create(session, &self.component).await?)
    }
}
