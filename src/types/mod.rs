//! Wire types for the store admin API.
//!
//! - [`Product`], [`Cart`], [`User`]: the three managed entity kinds
//! - [`Category`]: product category (slug + display name)
//! - [`ListPage`]: one fetched batch of items plus the server's total
//! - [`Resource`]: ties an entity type to its collection path

mod cart;
mod category;
mod page;
mod product;
mod user;

pub use cart::{Cart, CartLine};
pub use category::Category;
pub use page::ListPage;
pub use product::Product;
pub use user::{User, UserAddress};

use serde::de::DeserializeOwned;

/// An entity kind served under its own collection path.
///
/// The collection name is both the URL segment (`/products`) and the JSON key
/// that wraps list responses (`{"products": [...], "total": 194}`).
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Collection path segment and list envelope key.
    const COLLECTION: &'static str;

    /// Singular noun used in user-facing messages.
    const NOUN: &'static str;
}
