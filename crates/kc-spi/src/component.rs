//! Component models.
//!
//! A component is one configured instance of a provider inside a realm,
//! for example a user federation link added through the admin console.
//! The host persists components; providers only read them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::provider::SpiError;

/// A stored provider configuration.
///
/// Configuration values are multi-valued, mirroring the admin console form
/// where list properties may carry several entries under one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentModel {
    /// Unique identifier of this component.
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,

    /// Display name chosen by the administrator.
    pub name: String,

    /// ID of the factory that creates providers for this component.
    pub provider_id: String,

    /// SPI the component belongs to (e.g., "user-storage").
    pub provider_type: String,

    /// Owning realm.
    pub parent_id: Uuid,

    /// Provider-specific configuration.
    #[serde(default)]
    pub config: HashMap<String, Vec<String>>,
}

impl ComponentModel {
    /// Creates a component with an empty configuration.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        provider_id: impl Into<String>,
        provider_type: impl Into<String>,
        parent_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            provider_id: provider_id.into(),
            provider_type: provider_type.into(),
            parent_id,
            config: HashMap::new(),
        }
    }

    /// Parses a component from its TOML representation.
    ///
    /// ## Errors
    ///
    /// Returns [`SpiError::InvalidComponent`] if the document is malformed.
    pub fn from_toml_str(input: &str) -> Result<Self, SpiError> {
        toml::from_str(input).map_err(|e| SpiError::InvalidComponent(e.to_string()))
    }

    /// Appends a config value.
    #[must_use]
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Replaces all values stored under a key.
    pub fn put(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.config.insert(key.into(), values);
    }

    /// Gets the first value stored under a key.
    #[must_use]
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.config
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Gets every value stored under a key.
    #[must_use]
    pub fn get(&self, key: &str) -> &[String] {
        self.config.get(key).map_or(&[], Vec::as_slice)
    }

    /// Checks whether a key is present, even with no values.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.config.contains_key(key)
    }
}
