//! User storage provider traits.
//!
//! ## NIST 800-53 Rev5 Controls
//!
//! - IA-2: Identification and Authentication (Organizational Users)
//! - IA-5: Authenticator Management
//!
//! A storage provider advertises what it can do by implementing a subset of
//! narrow capability traits. The host checks each capability separately:
//! a provider that only implements [`UserLookupProvider`] can resolve users
//! at login but never shows up in admin searches.

use std::collections::{BTreeSet, HashMap};

use kc_model::CredentialInput;
use kc_spi::{ComponentFactory, ComponentModel, Provider, Spi, SpiError};
use uuid::Uuid;

use crate::config::FederationConfig;
use crate::error::FederationResult;
use crate::user_model::UserModel;

/// Name of the user storage SPI.
pub const USER_STORAGE_SPI: &str = "user-storage";

/// The user storage extension point.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserStorageSpi;

impl Spi for UserStorageSpi {
    fn name(&self) -> &'static str {
        USER_STORAGE_SPI
    }
}

// ============================================================================
// User Storage Provider
// ============================================================================

/// Base trait for user storage federation providers.
///
/// ## Implementation Notes
///
/// - Providers are created per session and must be thread-safe (Send + Sync)
/// - Lookups are async to support network-backed stores
pub trait UserStorageProvider: Provider {
    /// Returns the provider configuration.
    fn config(&self) -> &FederationConfig;

    /// Returns the provider type identifier.
    fn provider_type(&self) -> &'static str;
}

// ============================================================================
// Lookup
// ============================================================================

/// Resolves single users.
///
/// A miss is `Ok(None)`, never an error.
#[allow(async_fn_in_trait)]
pub trait UserLookupProvider: UserStorageProvider {
    /// The user view this provider hands out.
    type User: UserModel;

    /// Gets a user by host-wide id (see [`StorageId`](crate::StorageId)).
    async fn get_user_by_id(&self, realm_id: Uuid, id: &str)
        -> FederationResult<Option<Self::User>>;

    /// Gets a user by username.
    async fn get_user_by_username(
        &self,
        realm_id: Uuid,
        username: &str,
    ) -> FederationResult<Option<Self::User>>;

    /// Gets a user by email.
    async fn get_user_by_email(
        &self,
        realm_id: Uuid,
        email: &str,
    ) -> FederationResult<Option<Self::User>>;
}

// ============================================================================
// Query
// ============================================================================

/// Lists and searches users for the admin console.
#[allow(async_fn_in_trait)]
pub trait UserQueryProvider: UserLookupProvider {
    /// Counts the users in the store.
    async fn users_count(&self, realm_id: Uuid) -> FederationResult<usize>;

    /// Lists users for paging.
    async fn get_users(
        &self,
        realm_id: Uuid,
        first: usize,
        max: usize,
    ) -> FederationResult<Vec<Self::User>>;

    /// Lists every user.
    async fn get_all_users(&self, realm_id: Uuid) -> FederationResult<Vec<Self::User>> {
        self.get_users(realm_id, 0, usize::MAX).await
    }

    /// Searches users with a free-text query.
    async fn search_for_user(
        &self,
        realm_id: Uuid,
        search: &str,
        first: usize,
        max: usize,
    ) -> FederationResult<Vec<Self::User>>;

    /// Searches users with a free-text query, without paging.
    async fn search_for_user_unpaged(
        &self,
        realm_id: Uuid,
        search: &str,
    ) -> FederationResult<Vec<Self::User>> {
        self.search_for_user(realm_id, search, 0, usize::MAX).await
    }

    /// Searches users by attribute filters (`username`, `email`, ...).
    async fn search_for_user_by_params(
        &self,
        realm_id: Uuid,
        params: &HashMap<String, String>,
        first: usize,
        max: usize,
    ) -> FederationResult<Vec<Self::User>>;

    /// Lists members of a group.
    ///
    /// `None` means the store does not model groups.
    async fn get_group_members(
        &self,
        realm_id: Uuid,
        group_id: Uuid,
        first: usize,
        max: usize,
    ) -> FederationResult<Option<Vec<Self::User>>>;

    /// Finds users with an exact attribute value.
    ///
    /// `None` means the store does not model attributes.
    async fn search_for_user_by_attribute(
        &self,
        realm_id: Uuid,
        name: &str,
        value: &str,
    ) -> FederationResult<Option<Vec<Self::User>>>;
}

// ============================================================================
// Credentials
// ============================================================================

/// Declares which credential types a provider handles.
pub trait CredentialTypeSupport {
    /// Checks whether a credential type string is handled.
    fn supports_credential_type(&self, credential_type: &str) -> bool;
}

/// Validates credentials against the external store.
///
/// ## NIST 800-53 Rev5: IA-5
///
/// Implementations must never log the presented credential value.
#[allow(async_fn_in_trait)]
pub trait CredentialInputValidator: CredentialTypeSupport + Send + Sync {
    /// Checks whether the user has a credential of this type set up.
    fn is_configured_for(
        &self,
        realm_id: Uuid,
        user: &dyn UserModel,
        credential_type: &str,
    ) -> bool;

    /// Validates a presented credential.
    ///
    /// ## Errors
    ///
    /// Returns [`FederationError::NotSupported`](crate::FederationError::NotSupported)
    /// for credential types the provider does not handle.
    async fn is_valid(
        &self,
        realm_id: Uuid,
        user: &dyn UserModel,
        input: &CredentialInput,
    ) -> FederationResult<bool>;
}

/// Writes credentials to the external store.
#[allow(async_fn_in_trait)]
pub trait CredentialInputUpdater: CredentialTypeSupport + Send + Sync {
    /// Updates a credential.
    ///
    /// Returns `Ok(false)` if the type is not handled here and the host
    /// should try the next store.
    ///
    /// ## Errors
    ///
    /// Returns [`FederationError::ReadOnly`](crate::FederationError::ReadOnly)
    /// if the store refuses the update.
    async fn update_credential(
        &self,
        realm_id: Uuid,
        user: &dyn UserModel,
        input: &CredentialInput,
    ) -> FederationResult<bool>;

    /// Disables all credentials of a type for the user.
    async fn disable_credential_type(
        &self,
        realm_id: Uuid,
        user: &dyn UserModel,
        credential_type: &str,
    ) -> FederationResult<()>;

    /// Lists the credential types the admin may disable for the user.
    fn get_disableable_credential_types(
        &self,
        realm_id: Uuid,
        user: &dyn UserModel,
    ) -> BTreeSet<String>;
}

// ============================================================================
// Factory
// ============================================================================

/// Factory for user storage providers.
pub trait UserStorageProviderFactory<P: UserStorageProvider>: ComponentFactory<P> {
    /// Checks that a component was stored for this factory.
    ///
    /// ## Errors
    ///
    /// Returns [`SpiError::Configuration`] if the component names another
    /// SPI or another factory.
    fn check_component(&self, component: &ComponentModel) -> Result<(), SpiError> {
        if component.provider_type != USER_STORAGE_SPI {
            return Err(SpiError::Configuration(format!(
                "component '{}' belongs to SPI '{}', expected '{USER_STORAGE_SPI}'",
                component.name, component.provider_type
            )));
        }
        if component.provider_id != self.id() {
            return Err(SpiError::Configuration(format!(
                "component '{}' is for provider '{}', not '{}'",
                component.name,
                component.provider_id,
                self.id()
            )));
        }
        Ok(())
    }
}
