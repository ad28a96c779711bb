//! Client types for talking to the store admin API.
//!
//! The SDK uses a hierarchical client structure:
//! - [`Client`]: top-level client, owns the HTTP pool and the [`Session`]
//! - [`AuthClient`]: login, current user, token refresh
//! - [`ProductsClient`], [`CartsClient`], [`UsersClient`]: per-entity CRUD
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopadmin::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = Client::builder().url("https://dummyjson.com").build()?;
//!
//! client.auth().login(&LoginCredentials::new("emilys", "emilyspass")).await?;
//! let page = client.products().list().limit(12).await?;
//! println!("{} of {} products", page.len(), page.total);
//! # Ok(())
//! # }
//! ```

mod builder;
mod inner;

pub use builder::{ClientBuilder, HasUrl, NoUrl};

use std::sync::Arc;

use crate::Error;
use crate::api::{CartsClient, ProductsClient, UsersClient};
use crate::auth::{AuthClient, FileTokenStore, Session};
use crate::config::EnvConfig;

/// The store admin SDK client.
///
/// Create one with [`Client::builder()`] or [`Client::from_env()`], then reach
/// the per-entity clients through [`products()`](Client::products),
/// [`carts()`](Client::carts) and [`users()`](Client::users).
///
/// ## Thread Safety
///
/// `Client` is `Clone` and thread-safe. Clones share the connection pool and
/// the session.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<NoUrl> {
        ClientBuilder::new()
    }

    /// Creates a client from `SHOPADMIN_*` environment variables.
    ///
    /// See [`EnvConfig`] for the variables read. When `SHOPADMIN_TOKEN_FILE`
    /// is set, tokens persisted there are loaded into the session.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed variables, or a storage
    /// error if the token file exists but cannot be read.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(&EnvConfig::from_env()?)
    }

    /// Creates a client from already-read settings.
    ///
    /// # Errors
    ///
    /// Same as [`Client::from_env`].
    pub fn from_config(config: &EnvConfig) -> Result<Self, Error> {
        let session = match &config.token_file {
            Some(path) => Session::load(Arc::new(FileTokenStore::new(path)))?,
            None => Session::in_memory(),
        };

        Client::builder()
            .url(config.api_url.clone())
            .session(session)
            .timeout(config.timeout)
            .build()
    }

    /// Returns the authentication client.
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.clone())
    }

    /// Returns the products client.
    pub fn products(&self) -> ProductsClient {
        ProductsClient::new(self.clone())
    }

    /// Returns the carts client.
    pub fn carts(&self) -> CartsClient {
        CartsClient::new(self.clone())
    }

    /// Returns the users client.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.clone())
    }

    /// Returns the session shared by this client.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Returns the base URL of the client.
    pub fn url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    pub(crate) fn from_inner(inner: Arc<inner::ClientInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &inner::ClientInner {
        &self.inner
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.url())
            .field("session", &self.inner.session)
            .finish_non_exhaustive()
    }
}
