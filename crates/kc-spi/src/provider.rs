//! Provider traits for the SPI system.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::component::ComponentModel;
use crate::config_property::ProviderConfigProperty;
use crate::session::KeycloakSession;

/// Error type for SPI operations.
#[derive(Debug, Error)]
pub enum SpiError {
    /// Provider not found.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// Provider initialization failed.
    #[error("provider initialization failed: {0}")]
    InitializationFailed(String),

    /// Provider creation failed.
    #[error("provider creation failed: {0}")]
    CreationFailed(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A component definition could not be parsed.
    #[error("invalid component definition: {0}")]
    InvalidComponent(String),
}

/// Base trait for all providers.
///
/// Providers are the core building blocks of Keycloak's extensibility.
/// Each provider implements a specific capability (authentication, storage, etc.)
/// and lives for a single session.
pub trait Provider: Send + Sync + Debug + Any {
    /// Called when the provider is being closed.
    ///
    /// Use this to clean up any resources held by the provider.
    fn close(&self) {}

    /// Returns a reference to self as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Metadata about a provider.
#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    /// Unique identifier for this provider.
    pub id: &'static str,

    /// Human-readable name.
    pub name: &'static str,

    /// Description of what this provider does.
    pub description: &'static str,

    /// Priority for ordering (higher = preferred).
    pub priority: i32,
}

/// Factory for creating provider instances.
///
/// Factories are singletons that create provider instances for each session.
/// They handle initialization and configuration of providers.
///
/// ## Lifecycle
///
/// 1. `init()` - Called once at startup with configuration
/// 2. `post_init()` - Called after all factories are initialized
/// 3. `create()` - Called for each session (see [`ComponentFactory`])
/// 4. `close()` - Called at shutdown
#[async_trait]
pub trait ProviderFactory: Send + Sync + Debug {
    /// Returns the unique identifier for this factory.
    fn id(&self) -> &'static str;

    /// Returns metadata about providers created by this factory.
    fn metadata(&self) -> ProviderMetadata;

    /// Returns the priority for ordering (higher = preferred).
    fn order(&self) -> i32 {
        0
    }

    /// Initializes the factory with configuration.
    ///
    /// Called once at startup.
    ///
    /// ## Errors
    ///
    /// Returns an error if initialization fails.
    async fn init(&mut self, config: &dyn FactoryConfig) -> Result<(), SpiError>;

    /// Called after all factories have been initialized.
    ///
    /// ## Errors
    ///
    /// Returns an error if post-initialization fails.
    async fn post_init(&mut self) -> Result<(), SpiError> {
        Ok(())
    }

    /// Called when the factory is being shut down.
    fn close(&self) {}
}

/// Factory for providers configured per realm through a component.
///
/// User storage providers are components: an administrator adds one to a
/// realm, fills in the properties listed by [`config_properties`], and the
/// host calls [`create`] with the stored [`ComponentModel`] for every unit
/// of work that needs the provider.
///
/// [`config_properties`]: ComponentFactory::config_properties
/// [`create`]: ComponentFactory::create
#[async_trait]
pub trait ComponentFactory<P: Provider>: ProviderFactory {
    /// Creates a new provider instance bound to a session and component.
    ///
    /// ## Errors
    ///
    /// Returns an error if provider creation fails.
    async fn create(
        &self,
        session: &KeycloakSession,
        component: &ComponentModel,
    ) -> Result<P, SpiError>;

    /// Describes the configuration form shown in the admin console.
    fn config_properties(&self) -> &[ProviderConfigProperty];

    /// Short description shown next to the provider in the admin console.
    fn help_text(&self) -> &'static str {
        ""
    }

    /// Validates a component before the host stores it.
    ///
    /// ## Errors
    ///
    /// Returns [`SpiError::Configuration`] if the component is unusable.
    fn validate_configuration(
        &self,
        _session: &KeycloakSession,
        _component: &ComponentModel,
    ) -> Result<(), SpiError> {
        Ok(())
    }
}

/// Factory that publishes operational information on the server info page.
pub trait ServerInfoAwareProviderFactory: ProviderFactory {
    /// Returns display-only key/value pairs describing this provider.
    fn operational_info(&self) -> HashMap<String, String>;
}

/// Configuration interface for factory initialization.
pub trait FactoryConfig: Send + Sync {
    /// Gets a string configuration value.
    fn get(&self, key: &str) -> Option<&str>;
}

impl FactoryConfig for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

/// Definition of an SPI extension point.
///
/// An SPI defines a category of providers (e.g., "authenticator", "user-storage").
pub trait Spi: Send + Sync {
    /// Returns the unique name of this SPI.
    fn name(&self) -> &'static str;

    /// Returns whether this SPI is internal (not meant for external extension).
    fn is_internal(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestProvider {
        id: String,
    }

    impl Provider for TestProvider {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn provider_can_be_downcast() {
        let provider = TestProvider {
            id: "test".to_string(),
        };

        let downcast = provider.as_any().downcast_ref::<TestProvider>();

        assert!(downcast.is_some());
        assert_eq!(downcast.unwrap().id, "test");
    }

    #[test]
    fn hash_map_serves_as_factory_config() {
        let config = HashMap::from([("infoPath".to_string(), "/etc/info.properties".to_string())]);

        assert_eq!(FactoryConfig::get(&config, "infoPath"), Some("/etc/info.properties"));
        assert_eq!(FactoryConfig::get(&config, "missing"), None);
    }
}
