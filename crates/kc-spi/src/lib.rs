//! # kc-spi
//!
//! Service Provider Interface (SPI) traits for Keycloak Rust extensibility.
//!
//! This crate defines the core abstractions for the plugin system, allowing
//! custom implementations of user storage and other components to be
//! discovered and driven by the host.
//!
//! ## Design
//!
//! The SPI pattern uses Rust traits instead of Java interfaces:
//! - [`Provider`] - Base trait for all provider implementations
//! - [`ProviderFactory`] - Base trait for the singletons that create providers
//! - [`ComponentFactory`] - Factories whose providers are configured per realm
//!   through a [`ComponentModel`]
//! - [`ServerInfoAwareProviderFactory`] - Factories that publish diagnostics
//! - [`Spi`] - Definition of an SPI extension point

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod component;
pub mod config_property;
pub mod provider;
pub mod registry;
pub mod session;

pub use component::ComponentModel;
pub use config_property::{PropertyType, ProviderConfigProperty, ProviderConfigurationBuilder};
pub use provider::{
    ComponentFactory, FactoryConfig, Provider, ProviderFactory, ProviderMetadata,
    ServerInfoAwareProviderFactory, Spi, SpiError,
};
pub use registry::SpiRegistry;
pub use session::KeycloakSession;
