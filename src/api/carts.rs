//! Cart operations.

use std::future::IntoFuture;

use super::{Deleted, ListRequest};
use crate::forms::CartDraft;
use crate::listing::{DataSource, SourceFeatures, SourceFuture};
use crate::types::Cart;
use crate::{Client, Error};

/// Client for `/carts`.
///
/// Carts can only be paged; search and category filtering are not offered
/// by the API.
#[derive(Clone)]
pub struct CartsClient {
    client: Client,
}

impl CartsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists carts, one page at a time.
    pub fn list(&self) -> ListRequest<Cart> {
        ListRequest::new(self.client.clone(), "carts")
    }

    /// Gets a cart by ID.
    pub async fn get(&self, id: u64) -> Result<Cart, Error> {
        self.client.inner().get(&format!("carts/{}", id)).await
    }

    /// Lists the carts owned by one user.
    pub fn by_user(&self, user_id: u64) -> ListRequest<Cart> {
        ListRequest::new(self.client.clone(), format!("carts/user/{}", user_id))
    }

    /// Creates a cart.
    pub async fn create(&self, draft: &CartDraft) -> Result<Cart, Error> {
        let cart: Cart = self.client.inner().post("carts/add", draft).await?;
        tracing::info!(id = cart.id, user_id = cart.user_id, "cart created");
        Ok(cart)
    }

    /// Replaces a cart's lines.
    pub async fn update(&self, id: u64, draft: &CartDraft) -> Result<Cart, Error> {
        self.client.inner().put(&format!("carts/{}", id), draft).await
    }

    /// Deletes a cart.
    pub async fn delete(&self, id: u64) -> Result<Deleted<Cart>, Error> {
        let deleted: Deleted<Cart> = self.client.inner().delete(&format!("carts/{}", id)).await?;
        tracing::info!(id, "cart deleted");
        Ok(deleted)
    }
}

impl DataSource for CartsClient {
    type Item = Cart;

    fn features(&self) -> SourceFeatures {
        SourceFeatures::paged("carts")
    }

    fn fetch_page(&self, offset: u64, limit: u64) -> SourceFuture<'_, Cart> {
        self.list().limit(limit).skip(offset).into_future()
    }
}

impl std::fmt::Debug for CartsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartsClient").finish_non_exhaustive()
    }
}
