//! Authentication and session state.
//!
//! - [`LoginCredentials`]: username/password submitted to `/auth/login`
//! - [`SessionTokens`]: access + refresh token pair
//! - [`Session`]: the shared logged-in state every request reads from
//! - [`TokenStore`]: where tokens persist ([`MemoryTokenStore`], [`FileTokenStore`])
//! - [`AuthClient`]: login, current user, refresh, startup restore
//! - [`AuthGate`]: loading / redirect / allow decision for protected screens
//!
//! ## Startup
//!
//! ```rust,no_run
//! use shopadmin::auth::{AuthGate, FileTokenStore, Session};
//! use shopadmin::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), shopadmin::Error> {
//! let session = Session::load(Arc::new(FileTokenStore::new("tokens.json")))?;
//! let client = Client::builder()
//!     .url("https://dummyjson.com")
//!     .session(session.clone())
//!     .build()?;
//!
//! client.auth().restore().await?;
//! let decision = AuthGate::default().evaluate(session.state());
//! # Ok(())
//! # }
//! ```

mod client;
mod credentials;
mod gate;
mod session;
mod store;

pub use client::{AuthClient, LOGIN_FAILED, REGISTRATION_SUCCESSFUL};
pub use credentials::{LoginCredentials, SessionTokens};
pub use gate::{AuthGate, AuthState, GateDecision};
pub use session::Session;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
