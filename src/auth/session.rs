//! Explicit session context.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use zeroize::Zeroizing;

use super::gate::AuthState;
use super::store::{MemoryTokenStore, TokenStore};
use super::SessionTokens;
use crate::types::User;
use crate::Error;

/// The logged-in state shared by everything that issues requests.
///
/// A `Session` is created once at startup and handed to the
/// [`ClientBuilder`](crate::ClientBuilder); every request reads the current
/// access token from it. It is `Clone` and cheap to share: clones observe the
/// same state.
///
/// ## Lifecycle
///
/// 1. [`Session::load`] reads persisted tokens once. If tokens were found the
///    session starts in the *loading* state until the current user is known.
/// 2. [`AuthClient::restore`](crate::auth::AuthClient::restore) looks up the
///    current user; on failure it clears the tokens.
/// 3. [`AuthClient::login`](crate::auth::AuthClient::login) stores new tokens.
/// 4. [`Session::logout`] clears tokens and user.
///
/// ## Example
///
/// ```rust
/// use shopadmin::auth::{MemoryTokenStore, Session};
/// use std::sync::Arc;
///
/// let session = Session::load(Arc::new(MemoryTokenStore::new())).unwrap();
/// assert!(!session.is_authenticated());
/// assert!(!session.state().loading);
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    store: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
}

#[derive(Default)]
struct SessionState {
    tokens: Option<SessionTokens>,
    user: Option<User>,
    loading: bool,
}

impl Session {
    /// Loads persisted tokens from `store`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read.
    pub fn load(store: Arc<dyn TokenStore>) -> Result<Self, Error> {
        let tokens = store.load()?;
        let loading = tokens.is_some();
        Ok(Self {
            inner: Arc::new(SessionInner {
                store,
                state: RwLock::new(SessionState {
                    tokens,
                    user: None,
                    loading,
                }),
            }),
        })
    }

    /// Creates an empty session backed by a [`MemoryTokenStore`].
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                store: Arc::new(MemoryTokenStore::new()),
                state: RwLock::new(SessionState::default()),
            }),
        }
    }

    /// Returns a copy of the current access token, wiped on drop.
    pub fn access_token(&self) -> Option<Zeroizing<String>> {
        self.inner
            .state
            .read()
            .tokens
            .as_ref()
            .map(|t| Zeroizing::new(t.access_token().to_string()))
    }

    /// Returns a copy of the current refresh token, wiped on drop.
    pub fn refresh_token(&self) -> Option<Zeroizing<String>> {
        self.inner
            .state
            .read()
            .tokens
            .as_ref()
            .and_then(|t| t.refresh_token().map(|r| Zeroizing::new(r.to_string())))
    }

    /// Returns a copy of the current tokens.
    pub fn tokens(&self) -> Option<SessionTokens> {
        self.inner.state.read().tokens.clone()
    }

    /// Returns the current user, once known.
    pub fn user(&self) -> Option<User> {
        self.inner.state.read().user.clone()
    }

    /// Returns `true` while an access token is held.
    ///
    /// Authentication is token presence; the user record may still be loading.
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().tokens.is_some()
    }

    /// Returns `true` while the startup user lookup is pending.
    pub fn is_loading(&self) -> bool {
        self.inner.state.read().loading
    }

    /// Returns the snapshot consumed by [`AuthGate`](super::AuthGate).
    pub fn state(&self) -> AuthState {
        let state = self.inner.state.read();
        AuthState {
            is_authenticated: state.tokens.is_some(),
            loading: state.loading,
        }
    }

    /// Installs freshly issued tokens and the user they belong to.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the tokens cannot be persisted; the
    /// in-memory session is updated regardless.
    pub fn establish(&self, tokens: SessionTokens, user: Option<User>) -> Result<(), Error> {
        let persisted = self.inner.store.save(&tokens);
        {
            let mut state = self.inner.state.write();
            state.tokens = Some(tokens);
            if user.is_some() {
                state.user = user;
            }
            state.loading = false;
        }
        persisted
    }

    /// Records the user returned by the current-user lookup.
    pub fn set_user(&self, user: User) {
        let mut state = self.inner.state.write();
        state.user = Some(user);
        state.loading = false;
    }

    /// Clears tokens and user, in memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be cleared; the in-memory
    /// session is cleared regardless.
    pub fn logout(&self) -> Result<(), Error> {
        {
            let mut state = self.inner.state.write();
            *state = SessionState::default();
        }
        tracing::info!("session cleared");
        self.inner.store.clear()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("Session")
            .field("authenticated", &state.tokens.is_some())
            .field("user", &state.user.as_ref().map(|u| u.id))
            .field("loading", &state.loading)
            .finish_non_exhaustive()
    }
}
