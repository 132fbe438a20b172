//! User views exposed by storage providers.

use std::fmt::Debug;

use kc_model::User;
use uuid::Uuid;

use crate::error::FederationResult;

/// A live view of one user owned by a storage provider.
///
/// The host reads profile data through the accessors and routes admin
/// edits through the setters. Providers backed by a read-only store return
/// [`FederationError::ReadOnly`](crate::FederationError::ReadOnly) from
/// every setter.
pub trait UserModel: Send + Sync + Debug {
    /// Host-wide identifier (a storage id for federated users).
    fn id(&self) -> &str;

    /// Realm the view was created for.
    fn realm_id(&self) -> Uuid;

    /// Username.
    fn username(&self) -> &str;

    /// Changes the username.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing store rejects the change.
    fn set_username(&mut self, username: &str) -> FederationResult<()>;

    /// Email address.
    fn email(&self) -> Option<&str>;

    /// Changes the email address.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing store rejects the change.
    fn set_email(&mut self, email: Option<&str>) -> FederationResult<()>;

    /// First name.
    fn first_name(&self) -> Option<&str>;

    /// Changes the first name.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing store rejects the change.
    fn set_first_name(&mut self, first_name: Option<&str>) -> FederationResult<()>;

    /// Last name.
    fn last_name(&self) -> Option<&str>;

    /// Changes the last name.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing store rejects the change.
    fn set_last_name(&mut self, last_name: Option<&str>) -> FederationResult<()>;

    /// Creation time in milliseconds since the Unix epoch.
    fn created_timestamp(&self) -> Option<i64>;

    /// Changes the creation time.
    ///
    /// ## Errors
    ///
    /// Returns an error if the backing store rejects the change.
    fn set_created_timestamp(&mut self, millis: Option<i64>) -> FederationResult<()>;

    /// Whether the account may log in.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Component id of the owning federation provider.
    fn federation_link(&self) -> Option<&str> {
        None
    }

    /// Copies the view into a detached [`User`].
    fn to_user(&self) -> User {
        User {
            id: self.id().to_string(),
            realm_id: self.realm_id(),
            username: self.username().to_string(),
            enabled: self.is_enabled(),
            first_name: self.first_name().map(str::to_string),
            last_name: self.last_name().map(str::to_string),
            email: self.email().map(str::to_string),
            email_verified: false,
            created_timestamp: self.created_timestamp(),
            federation_link: self.federation_link().map(str::to_string),
            attributes: Default::default(),
        }
    }
}
