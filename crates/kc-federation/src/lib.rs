//! # kc-federation
//!
//! User federation framework for Keycloak Rust.
//!
//! This crate provides the capability traits a user storage provider
//! implements, the user view it hands to the host, and the helpers every
//! provider needs (storage ids, component settings, errors).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod provider;
pub mod storage_id;
pub mod user_model;

pub use config::{CachePolicy, EditMode, FederationConfig};
pub use error::{FederationError, FederationResult};
pub use provider::{
    CredentialInputUpdater, CredentialInputValidator, CredentialTypeSupport, UserLookupProvider,
    UserQueryProvider, UserStorageProvider, UserStorageProviderFactory, UserStorageSpi,
    USER_STORAGE_SPI,
};
pub use storage_id::StorageId;
pub use user_model::UserModel;
