//! Client builder with typestate pattern.

use std::{marker::PhantomData, sync::Arc, time::Duration};

use super::inner::ClientInner;
use crate::{Client, Error, auth::Session};

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern so that `build()` only exists once a URL has
/// been provided.
///
/// ## Required Configuration
///
/// - `url()`: the API endpoint
///
/// ## Optional Configuration
///
/// - `session()`: the shared [`Session`]; defaults to an empty in-memory one
/// - `timeout()`: per-request timeout (default 30 seconds)
/// - `insecure()`: allow plain `http://` URLs for local mock servers
///
/// ## Example
///
/// ```rust
/// use shopadmin::Client;
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .url("https://dummyjson.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), shopadmin::Error>(())
/// ```
pub struct ClientBuilder<UrlState> {
    url: Option<String>,
    session: Option<Session>,
    timeout: Option<Duration>,
    insecure: bool,
    _url_state: PhantomData<UrlState>,
}

impl ClientBuilder<NoUrl> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            session: None,
            timeout: None,
            insecure: false,
            _url_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl> {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder<NoUrl> {
    /// Sets the API base URL (e.g. `https://dummyjson.com`).
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl> {
        ClientBuilder {
            url: Some(url.into()),
            session: self.session,
            timeout: self.timeout,
            insecure: self.insecure,
            _url_state: PhantomData,
        }
    }
}

impl<U> ClientBuilder<U> {
    /// Sets the session whose token is attached to every request.
    ///
    /// Pass a clone of the same session to every consumer that needs to see
    /// login state.
    #[must_use]
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Allows plain HTTP connections.
    ///
    /// **WARNING**: tokens travel in clear text. Only use this against a local
    /// mock server.
    #[must_use]
    pub fn insecure(mut self) -> Self {
        self.insecure = true;
        self
    }
}

impl ClientBuilder<HasUrl> {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - the URL does not parse
    /// - the URL is not HTTPS and `insecure()` was not called
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<Client, Error> {
        let raw = self.url.ok_or_else(|| Error::configuration("URL is required"))?;

        let mut base_url = url::Url::parse(&raw)
            .map_err(|e| Error::configuration(format!("invalid URL: {}", e)))?;

        if base_url.scheme() != "https" && !self.insecure {
            return Err(Error::configuration(
                "HTTPS is required. Use .insecure() for development with HTTP.",
            ));
        }

        // Relative joins drop the last path segment unless it ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let timeout = self.timeout.unwrap_or(crate::config::DEFAULT_TIMEOUT);

        #[cfg(feature = "rest")]
        let http_client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        let inner = ClientInner {
            base_url,
            session: self.session.unwrap_or_default(),
            timeout,
            #[cfg(feature = "rest")]
            http_client,
        };

        Ok(Client::from_inner(Arc::new(inner)))
    }
}
