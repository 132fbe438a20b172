//! Per-record user views.

use kc_federation::{FederationError, FederationResult, StorageId, UserModel};
use uuid::Uuid;

use crate::records::UserRecord;

/// Read-only [`UserModel`] over one [`UserRecord`].
///
/// Adapters are cheap: they borrow the static record and are rebuilt for
/// every lookup. All setters fail with [`FederationError::ReadOnly`].
#[derive(Debug, Clone)]
pub struct MemoryUserAdapter {
    id: String,
    realm_id: Uuid,
    component_id: String,
    record: &'static UserRecord,
}

/// Wraps a record for the host.
#[must_use]
pub fn user_model(realm_id: Uuid, component_id: Uuid, record: &'static UserRecord) -> MemoryUserAdapter {
    let component_id = component_id.to_string();
    MemoryUserAdapter {
        id: StorageId::keycloak_id(&component_id, record.username),
        realm_id,
        component_id,
        record,
    }
}

impl MemoryUserAdapter {
    /// Returns the wrapped record.
    #[must_use]
    pub const fn record(&self) -> &'static UserRecord {
        self.record
    }
}

impl UserModel for MemoryUserAdapter {
    fn id(&self) -> &str {
        &self.id
    }

    fn realm_id(&self) -> Uuid {
        self.realm_id
    }

    fn username(&self) -> &str {
        self.record.username
    }

    fn set_username(&mut self, _username: &str) -> FederationResult<()> {
        Err(FederationError::read_only("set username of a memory user"))
    }

    fn email(&self) -> Option<&str> {
        Some(self.record.email)
    }

    fn set_email(&mut self, _email: Option<&str>) -> FederationResult<()> {
        Err(FederationError::read_only("set email of a memory user"))
    }

    fn first_name(&self) -> Option<&str> {
        Some(self.record.first_name)
    }

    fn set_first_name(&mut self, _first_name: Option<&str>) -> FederationResult<()> {
        Err(FederationError::read_only("set first name of a memory user"))
    }

    fn last_name(&self) -> Option<&str> {
        Some(self.record.last_name)
    }

    fn set_last_name(&mut self, _last_name: Option<&str>) -> FederationResult<()> {
        Err(FederationError::read_only("set last name of a memory user"))
    }

    fn created_timestamp(&self) -> Option<i64> {
        self.record.created_timestamp()
    }

    fn set_created_timestamp(&mut self, _millis: Option<i64>) -> FederationResult<()> {
        Err(FederationError::read_only("set created timestamp of a memory user"))
    }

    fn federation_link(&self) -> Option<&str> {
        Some(&self.component_id)
    }
}
