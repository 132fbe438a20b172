//! Credential domain model.
//!
//! Credentials are authentication factors for users, such as passwords and
//! OTP secrets. Providers receive them as a [`CredentialInput`]: the type
//! string chosen by the login flow plus the value the user presented.

use serde::{Deserialize, Serialize};

/// Credential type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialType {
    /// Password credential.
    #[serde(rename = "password")]
    Password,
    /// TOTP (Time-based One-Time Password) credential.
    #[serde(rename = "otp")]
    Totp,
    /// HOTP (HMAC-based One-Time Password) credential.
    #[serde(rename = "hotp")]
    Hotp,
    /// `WebAuthn` credential.
    #[serde(rename = "webauthn")]
    Webauthn,
    /// `WebAuthn` passwordless credential.
    #[serde(rename = "webauthn-passwordless")]
    WebauthnPasswordless,
    /// Recovery codes.
    #[serde(rename = "recovery-authn-codes")]
    RecoveryCodes,
}

impl CredentialType {
    /// Returns the string representation used in storage and on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Totp => "otp",
            Self::Hotp => "hotp",
            Self::Webauthn => "webauthn",
            Self::WebauthnPasswordless => "webauthn-passwordless",
            Self::RecoveryCodes => "recovery-authn-codes",
        }
    }

    /// Parses a type string. Unknown types yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "password" => Some(Self::Password),
            "otp" => Some(Self::Totp),
            "hotp" => Some(Self::Hotp),
            "webauthn" => Some(Self::Webauthn),
            "webauthn-passwordless" => Some(Self::WebauthnPasswordless),
            "recovery-authn-codes" => Some(Self::RecoveryCodes),
            _ => None,
        }
    }

    /// Checks whether a raw type string names this credential type.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.as_str() == value
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credential presented for validation or update.
///
/// The type is kept as a raw string because login flows and admin requests
/// may present types this build does not know.
///
/// ## Security Note
///
/// `challenge_response` holds the plaintext secret. The `Debug` output
/// redacts it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialInput {
    /// Credential type string (e.g., "password").
    #[serde(rename = "type")]
    pub credential_type: String,
    /// Value presented by the user.
    pub challenge_response: String,
}

impl CredentialInput {
    /// Creates a credential input of any type.
    #[must_use]
    pub fn new(credential_type: impl Into<String>, challenge_response: impl Into<String>) -> Self {
        Self {
            credential_type: credential_type.into(),
            challenge_response: challenge_response.into(),
        }
    }

    /// Creates a password credential input.
    #[must_use]
    pub fn password(value: impl Into<String>) -> Self {
        Self::new(CredentialType::Password.as_str(), value)
    }

    /// Returns the parsed credential type, if known.
    #[must_use]
    pub fn known_type(&self) -> Option<CredentialType> {
        CredentialType::parse(&self.credential_type)
    }

    /// Checks if this is a password credential.
    #[must_use]
    pub fn is_password(&self) -> bool {
        CredentialType::Password.matches(&self.credential_type)
    }
}

impl std::fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialInput")
            .field("credential_type", &self.credential_type)
            .field("challenge_response", &"[REDACTED]")
            .finish()
    }
}
