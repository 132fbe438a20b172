//! Storage identifiers for federated users.
//!
//! The host gives every federated user an id of the form
//! `f:<component id>:<external id>` so that a lookup can be routed to the
//! provider instance that owns the user. Ids without the `f:` prefix belong
//! to the host's local store.

use std::fmt;

const FEDERATED_PREFIX: &str = "f:";

/// A parsed user id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageId {
    provider_id: Option<String>,
    external_id: String,
}

impl StorageId {
    /// Parses a host-wide user id.
    ///
    /// The external id is everything after the second colon, so it may
    /// itself contain colons. A prefixed id without a provider separator is
    /// treated as a local id.
    #[must_use]
    pub fn new(id: &str) -> Self {
        id.strip_prefix(FEDERATED_PREFIX)
            .and_then(|rest| rest.split_once(':'))
            .map_or_else(
                || Self {
                    provider_id: None,
                    external_id: id.to_string(),
                },
                |(provider_id, external_id)| Self {
                    provider_id: Some(provider_id.to_string()),
                    external_id: external_id.to_string(),
                },
            )
    }

    /// Builds the id of a user owned by a federation provider.
    #[must_use]
    pub fn from_parts(provider_id: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            provider_id: Some(provider_id.into()),
            external_id: external_id.into(),
        }
    }

    /// Formats the host-wide id for a federated user.
    #[must_use]
    pub fn keycloak_id(provider_id: &str, external_id: &str) -> String {
        format!("{FEDERATED_PREFIX}{provider_id}:{external_id}")
    }

    /// Returns the owning component id, if the user is federated.
    #[must_use]
    pub fn provider_id(&self) -> Option<&str> {
        self.provider_id.as_deref()
    }

    /// Returns the id inside the owning store.
    #[must_use]
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Checks whether the user lives in the host's local store.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        self.provider_id.is_none()
    }
}

impl From<&str> for StorageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.provider_id {
            Some(provider_id) => write!(f, "{FEDERATED_PREFIX}{provider_id}:{}", self.external_id),
            None => f.write_str(&self.external_id),
        }
    }
}
