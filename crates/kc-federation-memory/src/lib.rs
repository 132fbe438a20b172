//! # kc-federation-memory
//!
//! Read-only in-memory user federation provider for Keycloak Rust.
//!
//! The provider serves three fixed users to the host's user storage SPI.
//! It is meant for demonstrations and for exercising the federation
//! plumbing: lookups, paging, password checks and the admin configuration
//! form all work, while every write is refused.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kc_federation_memory::{register, MemoryUserStorageProviderFactory};
//!
//! let factory = register(&registry, MemoryUserStorageProviderFactory::new());
//! let provider = factory.create(&session, &component).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod adapter;
pub mod config;
pub mod factory;
pub mod metadata;
pub mod properties;
pub mod provider;
pub mod records;
pub mod server_info;

pub use adapter::{user_model, MemoryUserAdapter};
pub use config::{ProviderConfig, MY_PARAMETER};
pub use factory::{register, MemoryUserStorageProviderFactory, INFO_PATH, PROVIDER_ID};
pub use provider::MemoryUserStorageProvider;
pub use records::UserRecord;
pub use server_info::{InfoSource, PropertiesServerInfoDelegate, ServerInfoError};
