//! Federation provider configuration.
//!
//! Every user storage component carries a few host-level settings next to
//! its provider-specific ones. [`FederationConfig`] reads them from the
//! component once, when a provider is created.

use std::collections::HashMap;
use std::time::Duration;

use kc_spi::ComponentModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FederationError, FederationResult};

/// Component config keys read by [`FederationConfig::from_component`].
pub mod keys {
    /// Lookup priority (lower = consulted first).
    pub const PRIORITY: &str = "priority";
    /// Whether the provider is enabled.
    pub const ENABLED: &str = "enabled";
    /// Edit mode (`READ_ONLY`, `WRITABLE`, `UNSYNCED`).
    pub const EDIT_MODE: &str = "editMode";
    /// Cache policy (`DEFAULT`, `NO_CACHE`, `MAX_LIFESPAN`).
    pub const CACHE_POLICY: &str = "cachePolicy";
    /// Cache lifespan in milliseconds for `MAX_LIFESPAN`.
    pub const MAX_LIFESPAN: &str = "maxLifespan";
}

/// Edit mode for federated users.
///
/// Controls whether changes to users are written back to the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditMode {
    /// Users are read-only. Changes in Keycloak are not written back.
    #[default]
    ReadOnly,

    /// Users are writable. Changes in Keycloak are written back to the external store.
    Writable,

    /// Changes are stored locally in Keycloak and not written back.
    Unsynced,
}

impl EditMode {
    /// Parses the value stored in the component config.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "READ_ONLY" => Some(Self::ReadOnly),
            "WRITABLE" => Some(Self::Writable),
            "UNSYNCED" => Some(Self::Unsynced),
            _ => None,
        }
    }

    /// Returns true if the mode allows writes to the external store.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(self, Self::Writable)
    }

    /// Returns true if the mode is read-only.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }
}

/// Cache policy for federated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CachePolicy {
    /// Cache with default TTL.
    #[default]
    Default,

    /// Never cache (always query external store).
    NoCache,

    /// Cache with a bounded lifespan.
    MaxLifespan {
        /// Maximum cache age.
        max_lifespan: Duration,
    },
}

/// Host-level settings of a user storage component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationConfig {
    /// Component id.
    pub id: Uuid,

    /// Realm this provider belongs to.
    pub realm_id: Uuid,

    /// Factory id (e.g., "ldap").
    pub provider_id: String,

    /// Display name.
    pub name: String,

    /// Priority for user lookup (lower = higher priority).
    pub priority: i32,

    /// Whether the provider is enabled.
    pub enabled: bool,

    /// Edit mode.
    pub edit_mode: EditMode,

    /// Cache policy.
    pub cache_policy: CachePolicy,

    /// Raw component configuration.
    pub config: HashMap<String, Vec<String>>,
}

impl FederationConfig {
    /// Reads the host-level settings from a component.
    ///
    /// Missing keys take their defaults: priority 0, enabled, read-only,
    /// default cache policy.
    ///
    /// ## Errors
    ///
    /// Returns [`FederationError::Configuration`] if a present value cannot
    /// be parsed.
    pub fn from_component(component: &ComponentModel) -> FederationResult<Self> {
        let priority = match component.get_first(keys::PRIORITY) {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| FederationError::config(format!("invalid priority '{v}'")))?,
            None => 0,
        };

        let enabled = match component.get_first(keys::ENABLED) {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| FederationError::config(format!("invalid enabled flag '{v}'")))?,
            None => true,
        };

        let edit_mode = match component.get_first(keys::EDIT_MODE) {
            Some(v) => EditMode::parse(v)
                .ok_or_else(|| FederationError::config(format!("invalid edit mode '{v}'")))?,
            None => EditMode::default(),
        };

        Ok(Self {
            id: component.id,
            realm_id: component.parent_id,
            provider_id: component.provider_id.clone(),
            name: component.name.clone(),
            priority,
            enabled,
            edit_mode,
            cache_policy: parse_cache_policy(component)?,
            config: component.config.clone(),
        })
    }

    /// Gets the first config value stored under a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.config
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

fn parse_cache_policy(component: &ComponentModel) -> FederationResult<CachePolicy> {
    match component.get_first(keys::CACHE_POLICY) {
        None | Some("DEFAULT") => Ok(CachePolicy::Default),
        Some("NO_CACHE") => Ok(CachePolicy::NoCache),
        Some("MAX_LIFESPAN") => {
            let millis: u64 = component
                .get_first(keys::MAX_LIFESPAN)
                .ok_or_else(|| FederationError::config("MAX_LIFESPAN requires maxLifespan"))?
                .trim()
                .parse()
                .map_err(|_| FederationError::config("maxLifespan must be milliseconds"))?;
            Ok(CachePolicy::MaxLifespan {
                max_lifespan: Duration::from_millis(millis),
            })
        }
        Some(other) => Err(FederationError::config(format!(
            "invalid cache policy '{other}'"
        ))),
    }
}
