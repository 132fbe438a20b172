//! # kc-model
//!
//! Domain models for Keycloak Rust.
//!
//! This crate defines the user and credential shapes exchanged between the
//! host and its storage providers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod credential;
pub mod user;

pub use credential::{CredentialInput, CredentialType};
pub use user::User;
