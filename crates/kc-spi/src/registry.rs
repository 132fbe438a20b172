//! SPI Registry for managing provider factories.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::config_property::ProviderConfigProperty;
use crate::provider::{
    ComponentFactory, Provider, ProviderMetadata, ServerInfoAwareProviderFactory, Spi,
};

/// Registry for SPI provider factories.
///
/// The registry maintains a mapping of SPI names to their provider factories,
/// allowing the host to look up a factory by the `provider_id` stored in a
/// component and to render its configuration form and server info.
#[derive(Debug, Default)]
pub struct SpiRegistry {
    /// Map of SPI name to registered factories.
    factories: DashMap<&'static str, Vec<FactoryEntry>>,
}

#[derive(Debug)]
struct FactoryEntry {
    id: &'static str,
    metadata: ProviderMetadata,
    provider_type: TypeId,
    config_properties: Vec<ProviderConfigProperty>,
    server_info: Option<Arc<dyn ServerInfoAwareProviderFactory>>,
    factory: Arc<dyn Any + Send + Sync>,
}

impl SpiRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component factory.
    ///
    /// Returns the shared handle the registry keeps for the factory.
    pub fn register<P, F>(&self, spi: &dyn Spi, factory: F) -> Arc<F>
    where
        P: Provider + 'static,
        F: ComponentFactory<P> + 'static,
    {
        let factory = Arc::new(factory);
        self.insert::<P, F>(spi, Arc::clone(&factory), None);
        factory
    }

    /// Registers a component factory that also publishes server info.
    pub fn register_server_info_aware<P, F>(&self, spi: &dyn Spi, factory: F) -> Arc<F>
    where
        P: Provider + 'static,
        F: ComponentFactory<P> + ServerInfoAwareProviderFactory + 'static,
    {
        let factory = Arc::new(factory);
        let server_info: Arc<dyn ServerInfoAwareProviderFactory> = factory.clone();
        self.insert::<P, F>(spi, Arc::clone(&factory), Some(server_info));
        factory
    }

    fn insert<P, F>(
        &self,
        spi: &dyn Spi,
        factory: Arc<F>,
        server_info: Option<Arc<dyn ServerInfoAwareProviderFactory>>,
    ) where
        P: Provider + 'static,
        F: ComponentFactory<P> + 'static,
    {
        let entry = FactoryEntry {
            id: factory.id(),
            metadata: factory.metadata(),
            provider_type: TypeId::of::<P>(),
            config_properties: factory.config_properties().to_vec(),
            server_info,
            factory,
        };

        tracing::debug!(spi = spi.name(), provider_id = entry.id, "Registered provider factory");

        let mut entries = self.factories.entry(spi.name()).or_default();
        entries.retain(|e| e.id != entry.id);
        entries.push(entry);
    }

    /// Lists all registered provider IDs for an SPI.
    #[must_use]
    pub fn list_providers(&self, spi_name: &str) -> Vec<&'static str> {
        self.factories
            .get(spi_name)
            .map(|entries| entries.iter().map(|e| e.id).collect())
            .unwrap_or_default()
    }

    /// Gets provider metadata by SPI and provider ID.
    #[must_use]
    pub fn get_metadata(&self, spi_name: &str, provider_id: &str) -> Option<ProviderMetadata> {
        self.with_entry(spi_name, provider_id, |e| e.metadata.clone())
    }

    /// Gets the configuration form of a provider.
    #[must_use]
    pub fn get_config_properties(
        &self,
        spi_name: &str,
        provider_id: &str,
    ) -> Option<Vec<ProviderConfigProperty>> {
        self.with_entry(spi_name, provider_id, |e| e.config_properties.clone())
    }

    /// Collects the server info published by a provider factory.
    ///
    /// Returns `None` if the factory is unknown or does not publish any.
    #[must_use]
    pub fn operational_info(
        &self,
        spi_name: &str,
        provider_id: &str,
    ) -> Option<HashMap<String, String>> {
        let server_info = self.with_entry(spi_name, provider_id, |e| e.server_info.clone())??;
        Some(server_info.operational_info())
    }

    /// Gets a registered factory by its concrete type.
    #[must_use]
    pub fn get_factory<F>(&self, spi_name: &str, provider_id: &str) -> Option<Arc<F>>
    where
        F: Any + Send + Sync,
    {
        let factory = self.with_entry(spi_name, provider_id, |e| Arc::clone(&e.factory))?;
        factory.downcast::<F>().ok()
    }

    /// Checks whether a factory creates providers of type `P`.
    #[must_use]
    pub fn creates<P: Provider>(&self, spi_name: &str, provider_id: &str) -> bool {
        self.with_entry(spi_name, provider_id, |e| e.provider_type == TypeId::of::<P>())
            .unwrap_or(false)
    }

    /// Checks if a provider is registered.
    #[must_use]
    pub fn has_provider(&self, spi_name: &str, provider_id: &str) -> bool {
        self.with_entry(spi_name, provider_id, |_| ()).is_some()
    }

    fn with_entry<T>(
        &self,
        spi_name: &str,
        provider_id: &str,
        f: impl FnOnce(&FactoryEntry) -> T,
    ) -> Option<T> {
        self.factories
            .get(spi_name)
            .and_then(|entries| entries.iter().find(|e| e.id == provider_id).map(f))
    }
}
