//! The Data Source seam between the coordinator and the API.

use std::future::Future;
use std::pin::Pin;

use super::query::FetchPlan;
use super::sort::Sortable;
use crate::Error;
use crate::types::ListPage;

/// Boxed future returned by [`DataSource`] calls.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<ListPage<T>, Error>> + Send + 'a>>;

/// Which query modes an entity kind supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFeatures {
    /// Plural noun used in messages ("products").
    pub label: &'static str,
    /// Free-text search is available.
    pub search: bool,
    /// Category filtering is available.
    pub category: bool,
}

impl SourceFeatures {
    /// Paged listing only.
    pub const fn paged(label: &'static str) -> Self {
        Self {
            label,
            search: false,
            category: false,
        }
    }

    /// Enables search.
    #[must_use]
    pub const fn with_search(mut self) -> Self {
        self.search = true;
        self
    }

    /// Enables category filtering.
    #[must_use]
    pub const fn with_category(mut self) -> Self {
        self.category = true;
        self
    }
}

/// A remote collection the [`ListCoordinator`](super::ListCoordinator) can
/// page, search and filter.
///
/// Every call resolves to one [`ListPage`]. Modes an entity does not support
/// keep the provided implementations, which fail with `InvalidArgument`.
///
/// ## Object Safety
///
/// This trait is object-safe: `Box<dyn DataSource<Item = Product>>` works.
pub trait DataSource: Send + Sync {
    /// The entity kind listed.
    type Item: Sortable + Clone + Send + Sync + 'static;

    /// Describes the supported query modes.
    fn features(&self) -> SourceFeatures;

    /// Fetches `limit` items starting at `offset`.
    fn fetch_page(&self, offset: u64, limit: u64) -> SourceFuture<'_, Self::Item>;

    /// Runs a free-text search. Results are not paged by the server.
    fn search(&self, query: &str) -> SourceFuture<'_, Self::Item> {
        let message = format!("{} cannot be searched (query '{}')", self.features().label, query);
        Box::pin(async move { Err(Error::invalid_argument(message)) })
    }

    /// Lists one category. Results are not paged by the server.
    fn by_category(&self, category: &str) -> SourceFuture<'_, Self::Item> {
        let message = format!(
            "{} cannot be filtered by category (category '{}')",
            self.features().label,
            category
        );
        Box::pin(async move { Err(Error::invalid_argument(message)) })
    }

    /// Issues the single call `plan` describes.
    fn fetch_plan(&self, plan: &FetchPlan) -> SourceFuture<'_, Self::Item> {
        match plan {
            FetchPlan::Search { query } => self.search(query),
            FetchPlan::ByCategory { category } => self.by_category(category),
            FetchPlan::Paged { offset, limit } => self.fetch_page(*offset, *limit),
        }
    }
}

impl<S: DataSource + ?Sized> DataSource for std::sync::Arc<S> {
    type Item = S::Item;

    fn features(&self) -> SourceFeatures {
        (**self).features()
    }

    fn fetch_page(&self, offset: u64, limit: u64) -> SourceFuture<'_, Self::Item> {
        (**self).fetch_page(offset, limit)
    }

    fn search(&self, query: &str) -> SourceFuture<'_, Self::Item> {
        (**self).search(query)
    }

    fn by_category(&self, category: &str) -> SourceFuture<'_, Self::Item> {
        (**self).by_category(category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Clone, Debug)]
    struct Row;
    impl Sortable for Row {}

    struct PagedOnly;

    impl DataSource for PagedOnly {
        type Item = Row;

        fn features(&self) -> SourceFeatures {
            SourceFeatures::paged("rows")
        }

        fn fetch_page(&self, _offset: u64, limit: u64) -> SourceFuture<'_, Row> {
            Box::pin(async move { Ok(ListPage::new(vec![Row; limit as usize], 100)) })
        }
    }

    #[tokio::test]
    async fn test_unsupported_modes_are_invalid_argument() {
        let source = PagedOnly;
        let err = source.search("x").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains("rows"));

        let err = source.by_category("beauty").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_trait_object_and_arc() {
        let boxed: Box<dyn DataSource<Item = Row>> = Box::new(PagedOnly);
        assert_eq!(boxed.fetch_page(0, 3).await.unwrap().len(), 3);

        let shared = std::sync::Arc::new(PagedOnly);
        assert_eq!(shared.features().label, "rows");
        assert_eq!(shared.fetch_page(0, 2).await.unwrap().total, 100);
    }

    #[tokio::test]
    async fn test_fetch_plan_routes_to_paged() {
        let page = PagedOnly
            .fetch_plan(&FetchPlan::Paged { offset: 0, limit: 4 })
            .await
            .unwrap();
        assert_eq!(page.len(), 4);

        let err = PagedOnly
            .fetch_plan(&FetchPlan::Search { query: "x".into() })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_feature_builders() {
        let features = SourceFeatures::paged("products").with_search().with_category();
        assert!(features.search && features.category);
        assert!(!SourceFeatures::paged("carts").search);
    }
}
