//! Shared-secret admin authorization.
//!
//! The admin surface has a single identity configured through the
//! environment. Every mutating request carries `email` and `password` in its
//! JSON body; they are compared against the configured pair in constant
//! time.

use std::fmt;

use folio_core::error::CoreError;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::extract::lenient_string;

type HmacSha256 = Hmac<Sha256>;

/// Key for the comparison MACs. Secrecy is not required: the MAC only
/// serves to compare fixed-length tags in constant time.
const COMPARISON_KEY: &[u8] = b"folio-admin-credential-comparison";

/// Configured admin identity.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read `ADMIN_EMAIL` and `ADMIN_PASSWORD`. Returns `None` when either is
    /// unset or empty.
    pub fn from_env() -> Option<Self> {
        let email = std::env::var("ADMIN_EMAIL").ok().filter(|v| !v.is_empty())?;
        let password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self::new(email, password))
    }

    /// Check submitted credentials. Both fields are always compared.
    pub fn verify(&self, submitted: &Credentials) -> bool {
        let email_ok = constant_time_eq(&self.email, submitted.email.as_deref().unwrap_or(""));
        let password_ok =
            constant_time_eq(&self.password, submitted.password.as_deref().unwrap_or(""));
        email_ok & password_ok
    }
}

/// Credentials submitted in a request body.
#[derive(Default, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Authorize a request against the configured admin identity.
///
/// Fails with a configuration error when no admin is configured and with
/// `Unauthorized` on mismatch.
pub fn require_admin(
    admin: Option<&AdminCredentials>,
    submitted: &Credentials,
) -> Result<(), CoreError> {
    let admin =
        admin.ok_or_else(|| CoreError::Config("Admin credentials not configured".into()))?;

    if !admin.verify(submitted) {
        tracing::warn!(email = ?submitted.email, "Rejected admin credentials");
        return Err(CoreError::Unauthorized("Unauthorized".into()));
    }
    Ok(())
}

fn mac_tag(value: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(COMPARISON_KEY).expect("HMAC accepts any key length");
    mac.update(value.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Compare two strings without leaking where they differ or their lengths.
fn constant_time_eq(expected: &str, provided: &str) -> bool {
    let mut mac = HmacSha256::new_from_slice(COMPARISON_KEY).expect("HMAC accepts any key length");
    mac.update(provided.as_bytes());
    mac.verify_slice(&mac_tag(expected)).is_ok()
}
