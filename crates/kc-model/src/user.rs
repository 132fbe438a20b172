//! User domain model.
//!
//! [`User`] is a detached snapshot of a user as the host sees it. Storage
//! providers expose live views over their own records; the host copies
//! them into this shape for rendering, export and token claims.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Keycloak user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    // === Identity ===
    /// Host-wide identifier. Federated users carry a storage id
    /// (`f:<component>:<external id>`).
    pub id: String,
    /// Realm this user belongs to.
    pub realm_id: Uuid,
    /// Unique username within the realm.
    pub username: String,
    /// Whether the user account is enabled.
    pub enabled: bool,

    // === Profile ===
    /// User's first name.
    pub first_name: Option<String>,
    /// User's last name.
    pub last_name: Option<String>,
    /// User's email address.
    pub email: Option<String>,
    /// Whether the email has been verified.
    pub email_verified: bool,

    // === Timestamps ===
    /// Creation time in milliseconds since the Unix epoch.
    pub created_timestamp: Option<i64>,

    // === Federation ===
    /// Component ID of the federation provider that owns this user.
    pub federation_link: Option<String>,

    // === Custom Attributes ===
    /// Custom user attributes.
    #[serde(default)]
    pub attributes: HashMap<String, Vec<String>>,
}

impl User {
    /// Creates a new enabled user with the given id and username.
    #[must_use]
    pub fn new(id: impl Into<String>, realm_id: Uuid, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            realm_id,
            username: username.into(),
            enabled: true,
            first_name: None,
            last_name: None,
            email: None,
            email_verified: false,
            created_timestamp: None,
            federation_link: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the user's email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the user's first name.
    #[must_use]
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    /// Sets the user's last name.
    #[must_use]
    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    /// Sets the creation time.
    #[must_use]
    pub const fn with_created_timestamp(mut self, millis: i64) -> Self {
        self.created_timestamp = Some(millis);
        self
    }

    /// Links the user to a federation provider.
    #[must_use]
    pub fn with_federation_link(mut self, component_id: impl Into<String>) -> Self {
        self.federation_link = Some(component_id.into());
        self
    }

    /// Gets the user's full name.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    /// Checks if this is a federated user.
    #[must_use]
    pub const fn is_federated(&self) -> bool {
        self.federation_link.is_some()
    }

    /// Gets the first value of an attribute.
    #[must_use]
    pub fn get_first_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }
}
