//! Keycloak session management.

use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::registry::SpiRegistry;

/// A Keycloak session represents a unit of work.
///
/// Sessions give providers access to the registry and to the realm the
/// current request operates on. Each request typically gets its own session,
/// and component factories create a fresh provider per session.
#[derive(Debug)]
pub struct KeycloakSession {
    /// Unique session identifier.
    id: Uuid,

    /// Reference to the SPI registry.
    registry: Arc<SpiRegistry>,

    /// Realm of the current request, once resolved.
    realm_id: RwLock<Option<Uuid>>,

    /// Whether this session has been closed.
    closed: RwLock<bool>,
}

impl KeycloakSession {
    /// Creates a new session.
    #[must_use]
    pub fn new(registry: Arc<SpiRegistry>) -> Self {
        Self {
            id: Uuid::now_v7(),
            registry,
            realm_id: RwLock::new(None),
            closed: RwLock::new(false),
        }
    }

    /// Creates a new session already bound to a realm.
    #[must_use]
    pub fn for_realm(registry: Arc<SpiRegistry>, realm_id: Uuid) -> Self {
        let session = Self::new(registry);
        session.set_realm(realm_id);
        session
    }

    /// Returns the session ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the SPI registry.
    #[must_use]
    pub const fn registry(&self) -> &Arc<SpiRegistry> {
        &self.registry
    }

    /// Binds the session to a realm.
    pub fn set_realm(&self, realm_id: Uuid) {
        *self.realm_id.write() = Some(realm_id);
    }

    /// Returns the realm of the current request, if resolved.
    #[must_use]
    pub fn realm_id(&self) -> Option<Uuid> {
        *self.realm_id.read()
    }

    /// Returns whether the session has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        *self.closed.read()
    }

    /// Closes the session.
    ///
    /// After closing, the session should not be used.
    pub fn close(&self) {
        *self.closed.write() = true;
    }
}

impl Drop for KeycloakSession {
    fn drop(&mut self) {
        if !*self.closed.get_mut() {
            tracing::warn!(session_id = %self.id, "Session dropped without being closed");
            self.close();
        }
    }
}
