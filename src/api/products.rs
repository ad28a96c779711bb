//! Product catalog operations.

use std::future::IntoFuture;

use super::{Deleted, ListRequest};
use crate::forms::ProductDraft;
use crate::listing::{DataSource, SourceFeatures, SourceFuture};
use crate::types::{Category, Product};
use crate::{Client, Error};

/// Client for `/products`.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn example(client: shopadmin::Client) -> Result<(), shopadmin::Error> {
/// let products = client.products();
///
/// let page = products.list().limit(12).skip(0).await?;
/// let phones = products.search("phone").await?;
/// let beauty = products.by_category("beauty").await?;
/// let categories = products.categories().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ProductsClient {
    client: Client,
}

impl ProductsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists products, one page at a time.
    pub fn list(&self) -> ListRequest<Product> {
        ListRequest::new(self.client.clone(), "products")
    }

    /// Gets a product by ID.
    pub async fn get(&self, id: u64) -> Result<Product, Error> {
        self.client.inner().get(&format!("products/{}", id)).await
    }

    /// Searches titles and descriptions.
    pub fn search(&self, query: &str) -> ListRequest<Product> {
        ListRequest::new(self.client.clone(), "products/search").with_param("q", query)
    }

    /// Lists the products of one category.
    pub fn by_category(&self, slug: &str) -> ListRequest<Product> {
        ListRequest::new(
            self.client.clone(),
            format!("products/category/{}", urlencoding::encode(slug)),
        )
    }

    /// Lists every category.
    pub async fn categories(&self) -> Result<Vec<Category>, Error> {
        self.client.inner().get("products/categories").await
    }

    /// Creates a product. The server echoes it with a fresh ID.
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, Error> {
        let product: Product = self.client.inner().post("products/add", draft).await?;
        tracing::info!(id = product.id, "product created");
        Ok(product)
    }

    /// Replaces a product's editable fields.
    pub async fn update(&self, id: u64, draft: &ProductDraft) -> Result<Product, Error> {
        self.client
            .inner()
            .put(&format!("products/{}", id), draft)
            .await
    }

    /// Deletes a product.
    pub async fn delete(&self, id: u64) -> Result<Deleted<Product>, Error> {
        let deleted: Deleted<Product> =
            self.client.inner().delete(&format!("products/{}", id)).await?;
        tracing::info!(id, "product deleted");
        Ok(deleted)
    }
}

impl DataSource for ProductsClient {
    type Item = Product;

    fn features(&self) -> SourceFeatures {
        SourceFeatures::paged("products").with_search().with_category()
    }

    fn fetch_page(&self, offset: u64, limit: u64) -> SourceFuture<'_, Product> {
        self.list().limit(limit).skip(offset).into_future()
    }

    fn search(&self, query: &str) -> SourceFuture<'_, Product> {
        ProductsClient::search(self, query).into_future()
    }

    fn by_category(&self, category: &str) -> SourceFuture<'_, Product> {
        ProductsClient::by_category(self, category).into_future()
    }
}

impl std::fmt::Debug for ProductsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsClient").finish_non_exhaustive()
    }
}
