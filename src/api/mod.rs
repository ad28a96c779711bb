//! Per-entity API clients.
//!
//! Access via [`Client::products()`](crate::Client::products),
//! [`Client::carts()`](crate::Client::carts) and
//! [`Client::users()`](crate::Client::users). List calls return a
//! [`ListRequest`] builder; every client also implements
//! [`DataSource`](crate::listing::DataSource) so it can back a
//! [`ListCoordinator`](crate::listing::ListCoordinator).

mod carts;
mod list;
mod products;
mod users;

pub use carts::CartsClient;
pub use list::ListRequest;
pub use products::ProductsClient;
pub use users::{UserDraft, UsersClient};

use serde::Deserialize;

/// The record echoed back by a `DELETE`.
///
/// The mock API never really deletes anything; it returns the record with a
/// deletion flag and timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted<T> {
    /// The record as it was.
    #[serde(flatten)]
    pub record: T,
    /// Server-side deletion flag.
    #[serde(default)]
    pub is_deleted: bool,
    /// Deletion timestamp (ISO 8601), when reported.
    #[serde(default)]
    pub deleted_on: Option<String>,
}
