//! List request builder shared by every entity client.

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;

use crate::types::{ListPage, Resource};
use crate::{Client, Error};

/// Request for one page of a collection, or of a search/category/user view.
///
/// Await it directly, optionally after setting `limit` and `skip`:
///
/// ```rust,no_run
/// # async fn example(client: shopadmin::Client) -> Result<(), shopadmin::Error> {
/// let page = client.products().list().limit(12).skip(24).await?;
/// # Ok(())
/// # }
/// ```
pub struct ListRequest<T> {
    client: Client,
    path: String,
    query: Vec<(&'static str, String)>,
    limit: Option<u64>,
    skip: Option<u64>,
    _item: PhantomData<fn() -> T>,
}

impl<T: Resource> ListRequest<T> {
    pub(crate) fn new(client: Client, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            query: Vec::new(),
            limit: None,
            skip: None,
            _item: PhantomData,
        }
    }

    pub(crate) fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Sets the maximum number of items. `0` asks the server for all of them.
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets how many items to skip.
    #[must_use]
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Returns the request path including its query string.
    pub fn path_and_query(&self) -> String {
        let mut parts: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        if let Some(skip) = self.skip {
            parts.push(format!("skip={}", skip));
        }

        if parts.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, parts.join("&"))
        }
    }

    async fn execute(self) -> Result<ListPage<T>, Error> {
        let path = self.path_and_query();
        let body: serde_json::Value = self.client.inner().get(&path).await?;
        let page = ListPage::from_envelope(T::COLLECTION, body)?;
        tracing::debug!(
            path = %path,
            items = page.len(),
            total = page.total,
            "list fetched"
        );
        Ok(page)
    }
}

impl<T: Resource> IntoFuture for ListRequest<T> {
    type Output = Result<ListPage<T>, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

impl<T> std::fmt::Debug for ListRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListRequest")
            .field("path", &self.path)
            .field("query", &self.query)
            .field("limit", &self.limit)
            .field("skip", &self.skip)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn client() -> Client {
        Client::builder().url("https://dummyjson.com").build().unwrap()
    }

    #[test]
    fn test_bare_path() {
        let request = ListRequest::<Product>::new(client(), "products");
        assert_eq!(request.path_and_query(), "products");
    }

    #[test]
    fn test_paging_params() {
        let request = ListRequest::<Product>::new(client(), "products")
            .limit(12)
            .skip(24);
        assert_eq!(request.path_and_query(), "products?limit=12&skip=24");
    }

    #[test]
    fn test_params_are_encoded() {
        let request =
            ListRequest::<Product>::new(client(), "products/search").with_param("q", "red & blue");
        assert_eq!(request.path_and_query(), "products/search?q=red%20%26%20blue");
    }
}
