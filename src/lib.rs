//! # shopadmin
//!
//! Rust SDK for administering a DummyJSON-style store: authentication,
//! CRUD over products, carts and users, and a reusable list coordinator
//! for paged, searchable, sortable entity lists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopadmin::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> shopadmin::Result<()> {
//!     let client = Client::builder()
//!         .url("https://dummyjson.com")
//!         .build()?;
//!
//!     // Log in; the session now carries the bearer token
//!     let user = client
//!         .auth()
//!         .login(&LoginCredentials::new("emilys", "emilyspass"))
//!         .await?;
//!     println!("Signed in as {}", user.full_name());
//!
//!     // List products, 12 per page on a wide viewport
//!     let mut products = ListCoordinator::new(client.products());
//!     products.mount(1280).await;
//!     if products.set_sort_key(SortKey::PriceAsc) {
//!         products.refresh().await;
//!     }
//!     for product in products.items() {
//!         println!("{:>8.2}  {}", product.price, product.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Client Hierarchy**: `Client` → `ProductsClient` / `CartsClient` / `UsersClient`
//! - **Session**: an explicit, shared context; every request reads its bearer token
//! - **One call per fetch**: search beats category beats paging
//! - **Failures are notices**: list fetch errors raise a [`Notice`](listing::Notice),
//!   never a panic, and the previous page stays on screen
//!
//! ## Features
//!
//! - `rest` (default): HTTP transport via reqwest
//! - `rustls` (default): Use rustls for TLS
//! - `native-tls`: Use native TLS (OpenSSL on Linux, Secure Transport on macOS)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Entity APIs
pub mod api;

// List coordination and forms
pub mod dashboard;
pub mod forms;
pub mod listing;

// Testing utilities
pub mod testing;

mod user_agent;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, Result};
pub use types::{Cart, Category, ListPage, Product, User};

// Re-export auth types
pub use auth::{AuthClient, LoginCredentials, Session, SessionTokens};

// Re-export config types
pub use config::{EnvConfig, ListConfig, PageSizePolicy};
