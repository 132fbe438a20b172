//! The fixed user records.
//!
//! The record set is built on first access and never changes afterwards, so
//! every session and thread reads the same slice without locking.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};

/// One user held by the memory store.
///
/// The password is kept in cleartext. This store exists for demonstrations
/// and must not hold real credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique username, the only lookup key.
    pub username: &'static str,
    /// Cleartext password.
    pub password: &'static str,
    /// Email address.
    pub email: &'static str,
    /// First name.
    pub first_name: &'static str,
    /// Last name.
    pub last_name: &'static str,
    /// Creation time with its original offset.
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl UserRecord {
    fn new(
        username: &'static str,
        password: &'static str,
        email: &'static str,
        first_name: &'static str,
        last_name: &'static str,
        created_at: &str,
    ) -> Self {
        Self {
            username,
            password,
            email,
            first_name,
            last_name,
            created_at: DateTime::parse_from_rfc3339(created_at).ok(),
        }
    }

    /// Creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub fn created_timestamp(&self) -> Option<i64> {
        self.created_at.map(|at| at.timestamp_millis())
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("created_at", &self.created_at)
            .finish()
    }
}

static RECORDS: LazyLock<Vec<UserRecord>> = LazyLock::new(|| {
    vec![
        UserRecord::new(
            "user1",
            "password1",
            "user1@example.com",
            "George",
            "Washington",
            "2023-01-01T12:00:00.000+05:00",
        ),
        UserRecord::new(
            "user2",
            "password2",
            "user2@example.com",
            "Abraham",
            "Lincoln",
            "2023-01-15T13:00:00.000+05:00",
        ),
        UserRecord::new(
            "user3",
            "password3",
            "user3@example.com",
            "Franklin",
            "Roosevelt",
            "2023-02-02T09:00:00.000+05:00",
        ),
    ]
});

/// Returns every record in insertion order.
#[must_use]
pub fn all() -> &'static [UserRecord] {
    &RECORDS
}

/// Finds a record by exact, case-sensitive username.
///
/// Blank usernames never match.
#[must_use]
pub fn find_by_username(username: &str) -> Option<&'static UserRecord> {
    if username.trim().is_empty() {
        return None;
    }
    all().iter().find(|r| r.username == username)
}
