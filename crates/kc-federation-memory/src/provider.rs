//! Memory storage provider implementation.
//!
//! ## NIST 800-53 Rev5 Controls
//!
//! - IA-5: Authenticator Management (passwords are compared, never logged)
//!
//! The provider is read-only: lookups and listings answer from the fixed
//! record set, and every write is refused.

use std::any::Any;
use std::collections::{BTreeSet, HashMap};

use kc_federation::config::FederationConfig;
use kc_federation::error::{FederationError, FederationResult};
use kc_federation::provider::{
    CredentialInputUpdater, CredentialInputValidator, CredentialTypeSupport, UserLookupProvider,
    UserQueryProvider, UserStorageProvider,
};
use kc_federation::{StorageId, UserModel};
use kc_model::{CredentialInput, CredentialType};
use kc_spi::Provider;
use uuid::Uuid;

use crate::adapter::{user_model, MemoryUserAdapter};
use crate::config::ProviderConfig;
use crate::records::{self, UserRecord};

/// Read-only storage provider over the fixed record set.
///
/// One instance is created per session and component.
#[derive(Debug)]
pub struct MemoryUserStorageProvider {
    /// Session the provider was created for.
    session_id: Uuid,

    /// Host-level component settings.
    federation_config: FederationConfig,

    /// Provider-specific settings.
    config: ProviderConfig,
}

impl MemoryUserStorageProvider {
    /// Creates a provider bound to a session and component.
    #[must_use]
    pub const fn new(
        session_id: Uuid,
        federation_config: FederationConfig,
        config: ProviderConfig,
    ) -> Self {
        Self {
            session_id,
            federation_config,
            config,
        }
    }

    /// Returns the session the provider belongs to.
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Returns the provider-specific settings.
    #[must_use]
    pub const fn provider_config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Returns the component this provider serves.
    #[must_use]
    pub const fn component_id(&self) -> Uuid {
        self.federation_config.id
    }

    fn adapt(&self, realm_id: Uuid, record: &'static UserRecord) -> MemoryUserAdapter {
        user_model(realm_id, self.component_id(), record)
    }

    /// Skips `first` records and keeps at most `max - first + 1`.
    fn page(&self, realm_id: Uuid, first: usize, max: usize) -> Vec<MemoryUserAdapter> {
        let limit = max.saturating_add(1).saturating_sub(first);
        records::all()
            .iter()
            .skip(first)
            .take(limit)
            .map(|record| self.adapt(realm_id, record))
            .collect()
    }
}

impl Provider for MemoryUserStorageProvider {
    fn close(&self) {
        tracing::trace!(session_id = %self.session_id, "Closing memory user storage provider");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl UserStorageProvider for MemoryUserStorageProvider {
    fn config(&self) -> &FederationConfig {
        &self.federation_config
    }

    fn provider_type(&self) -> &'static str {
        "memory"
    }
}

// ============================================================================
// Lookup
// ============================================================================

impl UserLookupProvider for MemoryUserStorageProvider {
    type User = MemoryUserAdapter;

    async fn get_user_by_id(
        &self,
        realm_id: Uuid,
        id: &str,
    ) -> FederationResult<Option<Self::User>> {
        tracing::trace!(%realm_id, id, "get_user_by_id");
        let storage_id = StorageId::new(id);
        self.get_user_by_username(realm_id, storage_id.external_id())
            .await
    }

    async fn get_user_by_username(
        &self,
        realm_id: Uuid,
        username: &str,
    ) -> FederationResult<Option<Self::User>> {
        tracing::trace!(%realm_id, username, "get_user_by_username");
        Ok(records::find_by_username(username).map(|record| self.adapt(realm_id, record)))
    }

    async fn get_user_by_email(
        &self,
        realm_id: Uuid,
        email: &str,
    ) -> FederationResult<Option<Self::User>> {
        // Email is not a lookup key here.
        tracing::trace!(%realm_id, email, "get_user_by_email");
        Ok(None)
    }
}

// ============================================================================
// Query
// ============================================================================

impl UserQueryProvider for MemoryUserStorageProvider {
    async fn users_count(&self, realm_id: Uuid) -> FederationResult<usize> {
        tracing::trace!(%realm_id, "users_count");
        Ok(records::all().len())
    }

    async fn get_users(
        &self,
        realm_id: Uuid,
        first: usize,
        max: usize,
    ) -> FederationResult<Vec<Self::User>> {
        tracing::trace!(%realm_id, first, max, "get_users");
        Ok(self.page(realm_id, first, max))
    }

    async fn search_for_user(
        &self,
        realm_id: Uuid,
        search: &str,
        first: usize,
        max: usize,
    ) -> FederationResult<Vec<Self::User>> {
        tracing::trace!(%realm_id, search, first, max, "search_for_user");
        self.get_users(realm_id, first, max).await
    }

    async fn search_for_user_by_params(
        &self,
        realm_id: Uuid,
        params: &HashMap<String, String>,
        first: usize,
        max: usize,
    ) -> FederationResult<Vec<Self::User>> {
        tracing::trace!(%realm_id, params = params.len(), first, max, "search_for_user_by_params");
        self.search_for_user(realm_id, "", first, max).await
    }

    async fn get_group_members(
        &self,
        realm_id: Uuid,
        group_id: Uuid,
        _first: usize,
        _max: usize,
    ) -> FederationResult<Option<Vec<Self::User>>> {
        tracing::trace!(%realm_id, %group_id, "get_group_members");
        Ok(None)
    }

    async fn search_for_user_by_attribute(
        &self,
        realm_id: Uuid,
        name: &str,
        _value: &str,
    ) -> FederationResult<Option<Vec<Self::User>>> {
        tracing::trace!(%realm_id, name, "search_for_user_by_attribute");
        Ok(None)
    }
}

// ============================================================================
// Credentials
// ============================================================================

impl CredentialTypeSupport for MemoryUserStorageProvider {
    fn supports_credential_type(&self, credential_type: &str) -> bool {
        CredentialType::Password.matches(credential_type)
    }
}

impl CredentialInputValidator for MemoryUserStorageProvider {
    fn is_configured_for(
        &self,
        _realm_id: Uuid,
        _user: &dyn UserModel,
        credential_type: &str,
    ) -> bool {
        self.supports_credential_type(credential_type)
    }

    async fn is_valid(
        &self,
        realm_id: Uuid,
        user: &dyn UserModel,
        input: &CredentialInput,
    ) -> FederationResult<bool> {
        if !self.supports_credential_type(&input.credential_type) {
            return Err(FederationError::not_supported(format!(
                "validate credential type '{}'",
                input.credential_type
            )));
        }

        let Some(record) = records::find_by_username(user.username()) else {
            tracing::debug!(%realm_id, username = user.username(), "Credential check for unknown user");
            return Ok(false);
        };

        let valid = record.password == input.challenge_response;
        tracing::debug!(%realm_id, username = record.username, valid, "Password checked");
        Ok(valid)
    }
}

impl CredentialInputUpdater for MemoryUserStorageProvider {
    async fn update_credential(
        &self,
        realm_id: Uuid,
        user: &dyn UserModel,
        input: &CredentialInput,
    ) -> FederationResult<bool> {
        if input.is_password() {
            tracing::debug!(%realm_id, username = user.username(), "Refusing password update");
            return Err(FederationError::read_only(format!(
                "update password of '{}'",
                user.username()
            )));
        }
        Ok(false)
    }

    async fn disable_credential_type(
        &self,
        _realm_id: Uuid,
        _user: &dyn UserModel,
        _credential_type: &str,
    ) -> FederationResult<()> {
        Ok(())
    }

    fn get_disableable_credential_types(
        &self,
        _realm_id: Uuid,
        _user: &dyn UserModel,
    ) -> BTreeSet<String> {
        BTreeSet::from([CredentialType::Password.as_str().to_string()])
    }
}
