//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::{LoginCredentials, SessionTokens};
use crate::types::User;
use crate::{Client, Error};

/// Message shown when a login fails without a server-provided reason.
pub const LOGIN_FAILED: &str = "Login failed";

/// Message returned by the registration stub.
pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful! Please login.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(flatten)]
    user: User,
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
    expires_in_mins: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Client for `/auth/*`.
///
/// Successful calls write their tokens into the client's [`Session`](super::Session),
/// so every later request carries the new bearer token.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
}

impl AuthClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Logs in and establishes the session.
    ///
    /// Returns the profile of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns the server's error message when it sent one, otherwise an
    /// error reading [`LOGIN_FAILED`].
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let response: LoginResponse = self
            .client
            .inner()
            .post("auth/login", credentials)
            .await
            .map_err(login_error)?;

        let tokens = SessionTokens::new(response.access_token, response.refresh_token);
        if let Err(e) = self
            .client
            .session()
            .establish(tokens, Some(response.user.clone()))
        {
            tracing::warn!(error = %e, "tokens not persisted");
        }

        tracing::info!(username = %response.user.username, "logged in");
        Ok(response.user)
    }

    /// Fetches the user the current token belongs to.
    pub async fn me(&self) -> Result<User, Error> {
        self.client.inner().get("auth/me").await
    }

    /// Exchanges the refresh token for a new token pair.
    ///
    /// # Errors
    ///
    /// Returns an unauthorized error if the session holds no refresh token.
    pub async fn refresh(&self) -> Result<SessionTokens, Error> {
        let refresh_token = self
            .client
            .session()
            .refresh_token()
            .ok_or_else(|| Error::unauthorized("no refresh token in session"))?;

        let response: RefreshResponse = self
            .client
            .inner()
            .post(
                "auth/refresh",
                &RefreshRequest {
                    refresh_token: &refresh_token,
                    expires_in_mins: 30,
                },
            )
            .await?;

        // The server may rotate the refresh token or omit it.
        let tokens = SessionTokens::new(
            response.access_token,
            response
                .refresh_token
                .or_else(|| Some(refresh_token.to_string())),
        );
        self.client.session().establish(tokens.clone(), None)?;
        tracing::debug!("access token refreshed");
        Ok(tokens)
    }

    /// Resolves the startup state of a session loaded from storage.
    ///
    /// With no stored token this is a no-op returning `None`. Otherwise the
    /// current user is looked up; on success it is recorded in the session,
    /// on any failure the stored tokens are discarded. Either way the session
    /// leaves the loading state.
    ///
    /// # Errors
    ///
    /// Only storage errors from clearing the token store propagate; lookup
    /// failures are absorbed into the logged-out state.
    pub async fn restore(&self) -> Result<Option<User>, Error> {
        let session = self.client.session();
        if !session.is_authenticated() {
            return Ok(None);
        }

        match self.me().await {
            Ok(user) => {
                session.set_user(user.clone());
                Ok(Some(user))
            },
            Err(e) => {
                tracing::warn!(error = %e, "stored session rejected, clearing tokens");
                session.logout()?;
                Ok(None)
            },
        }
    }

    /// Clears the session.
    pub fn logout(&self) -> Result<(), Error> {
        self.client.session().logout()
    }

    /// Registration placeholder.
    ///
    /// The API has no self-service sign-up; this checks the required fields
    /// and reports success without any network call.
    pub fn register(&self, credentials: &LoginCredentials) -> Result<&'static str, Error> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(Error::invalid_argument("username and password are required"));
        }
        Ok(REGISTRATION_SUCCESSFUL)
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient").finish_non_exhaustive()
    }
}

fn login_error(err: Error) -> Error {
    let has_server_message = err.status().is_some() && !err.message().starts_with("HTTP ");
    if has_server_message {
        err
    } else {
        Error::new(err.kind(), LOGIN_FAILED).with_source(err)
    }
}
