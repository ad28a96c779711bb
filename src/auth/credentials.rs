//! Login credentials and session tokens.

use std::fmt;

use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Username/password pair submitted to `POST /auth/login`.
///
/// ## Example
///
/// ```rust
/// use shopadmin::LoginCredentials;
///
/// let creds = LoginCredentials::new("emilys", "emilyspass").with_expires_in_mins(60);
/// assert_eq!(creds.expires_in_mins, 60);
/// ```
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    /// Login name.
    pub username: String,

    /// Plain-text password; never printed by `Debug`.
    pub password: Zeroizing<String>,

    /// Requested access-token lifetime in minutes.
    pub expires_in_mins: u32,
}

impl LoginCredentials {
    /// Creates credentials with the default 30 minute token lifetime.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
            expires_in_mins: 30,
        }
    }

    /// Sets the requested token lifetime.
    #[must_use]
    pub fn with_expires_in_mins(mut self, minutes: u32) -> Self {
        self.expires_in_mins = minutes;
        self
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("expires_in_mins", &self.expires_in_mins)
            .finish()
    }
}

/// Access and refresh tokens for one logged-in session.
///
/// Token strings are wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    access_token: Zeroizing<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<Zeroizing<String>>,
}

impl SessionTokens {
    /// Creates a token pair.
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: Zeroizing::new(access_token.into()),
            refresh_token: refresh_token.map(Zeroizing::new),
        }
    }

    /// Returns the bearer token attached to requests.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the refresh token, if the server issued one.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref().map(String::as_str)
    }

    /// Decodes the `exp` claim of the access token.
    ///
    /// Returns `None` when the token is not a JWT or carries no expiry. The
    /// signature is not verified; this is only a hint for proactive refresh.
    pub fn access_expires_at(&self) -> Option<DateTime<Utc>> {
        #[derive(Deserialize)]
        struct Claims {
            exp: Option<i64>,
        }

        let payload = self.access_token.split('.').nth(1)?;
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .ok()?;
        let claims: Claims = serde_json::from_slice(&bytes).ok()?;
        DateTime::from_timestamp(claims.exp?, 0)
    }

    /// Returns `true` if the access token's `exp` is at or before `now`.
    ///
    /// Tokens without a readable expiry are treated as live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.access_expires_at().is_some_and(|exp| exp <= now)
    }
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
