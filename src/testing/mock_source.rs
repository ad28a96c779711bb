//! MockDataSource: an in-memory catalog with failure injection.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::listing::{DataSource, FetchPlan, Sortable, SourceFeatures, SourceFuture};
use crate::types::{Cart, ListPage, Product, User};
use crate::{Error, ErrorKind};

type Matcher<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;

/// A [`DataSource`] backed by a `Vec`, for exercising list coordinators.
///
/// Every call is recorded as the [`FetchPlan`] it served. Failures and
/// delays are injected per call, in order.
///
/// ## Example
///
/// ```rust
/// use shopadmin::ErrorKind;
/// use shopadmin::listing::{DataSource, FetchPlan};
/// use shopadmin::testing::MockDataSource;
/// use shopadmin::types::Product;
///
/// let source = MockDataSource::products(vec![Product::default(); 3]);
/// source.fail_next(ErrorKind::Unavailable, "maintenance");
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// assert!(source.fetch_page(0, 10).await.is_err());
/// assert_eq!(source.fetch_page(0, 10).await.unwrap().total, 3);
/// assert_eq!(source.request_count(), 2);
/// assert_eq!(source.last_plan(), Some(FetchPlan::Paged { offset: 0, limit: 10 }));
/// # });
/// ```
#[derive(Clone)]
pub struct MockDataSource<T> {
    features: SourceFeatures,
    matches_search: Matcher<T>,
    matches_category: Matcher<T>,
    state: Arc<Mutex<MockState<T>>>,
    requests: Arc<AtomicUsize>,
}

struct MockState<T> {
    catalog: Vec<T>,
    plans: Vec<FetchPlan>,
    failures: VecDeque<Error>,
    holds: VecDeque<oneshot::Receiver<()>>,
}

/// Holds one mocked call open until released or dropped.
#[derive(Debug)]
pub struct MockGate {
    release: oneshot::Sender<()>,
}

impl MockGate {
    /// Lets the held call resolve.
    pub fn release(self) {
        let _ = self.release.send(());
    }
}

fn title_contains<T: Sortable>(item: &T, query: &str) -> bool {
    item.title()
        .is_some_and(|title| title.to_lowercase().contains(&query.to_lowercase()))
}

impl<T> MockDataSource<T>
where
    T: Sortable + Clone + Send + Sync + 'static,
{
    /// Creates a paged-only source. Search, when enabled with
    /// [`with_features`](Self::with_features), matches titles
    /// case-insensitively.
    pub fn new(label: &'static str, catalog: impl IntoIterator<Item = T>) -> Self {
        Self {
            features: SourceFeatures::paged(label),
            matches_search: Arc::new(title_contains::<T>),
            matches_category: Arc::new(|_: &T, _: &str| false),
            state: Arc::new(Mutex::new(MockState {
                catalog: catalog.into_iter().collect(),
                plans: Vec::new(),
                failures: VecDeque::new(),
                holds: VecDeque::new(),
            })),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Overrides the advertised query modes.
    #[must_use]
    pub fn with_features(mut self, features: SourceFeatures) -> Self {
        self.features = features;
        self
    }

    /// Overrides how search terms match items.
    #[must_use]
    pub fn with_search_matcher(mut self, matcher: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        self.matches_search = Arc::new(matcher);
        self
    }

    /// Overrides how category slugs match items.
    #[must_use]
    pub fn with_category_matcher(mut self, matcher: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        self.matches_category = Arc::new(matcher);
        self
    }

    /// Replaces the catalog served by later calls.
    pub fn set_catalog(&self, catalog: impl IntoIterator<Item = T>) {
        self.state.lock().catalog = catalog.into_iter().collect();
    }

    /// Makes the next call fail with `kind`.
    pub fn fail_next(&self, kind: ErrorKind, message: impl Into<String>) {
        self.state
            .lock()
            .failures
            .push_back(Error::new(kind, message.into()));
    }

    /// Holds the next call open until the returned gate is released.
    pub fn hold_next(&self) -> MockGate {
        let (release, held) = oneshot::channel();
        self.state.lock().holds.push_back(held);
        MockGate { release }
    }

    /// Number of calls made.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Every call made, oldest first.
    pub fn plans(&self) -> Vec<FetchPlan> {
        self.state.lock().plans.clone()
    }

    /// The most recent call.
    pub fn last_plan(&self) -> Option<FetchPlan> {
        self.state.lock().plans.last().cloned()
    }

    /// Forgets recorded calls and pending failures and holds.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.plans.clear();
        state.failures.clear();
        state.holds.clear();
        self.requests.store(0, Ordering::SeqCst);
    }

    fn serve(&self, plan: FetchPlan) -> SourceFuture<'_, T> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let (result, hold) = {
            let mut state = self.state.lock();
            let result = match state.failures.pop_front() {
                Some(err) => Err(err),
                None => Ok(self.answer(&state.catalog, &plan)),
            };
            state.plans.push(plan);
            (result, state.holds.pop_front())
        };

        Box::pin(async move {
            if let Some(hold) = hold {
                // A dropped gate releases too.
                let _ = hold.await;
            }
            result
        })
    }

    fn answer(&self, catalog: &[T], plan: &FetchPlan) -> ListPage<T> {
        match plan {
            FetchPlan::Paged { offset, limit } => {
                let start = usize::try_from(*offset).unwrap_or(usize::MAX).min(catalog.len());
                let end = start
                    .saturating_add(usize::try_from(*limit).unwrap_or(usize::MAX))
                    .min(catalog.len());
                ListPage {
                    items: catalog[start..end].to_vec(),
                    total: catalog.len() as u64,
                    skip: *offset,
                    limit: (end - start) as u64,
                }
            },
            FetchPlan::Search { query } => {
                let items: Vec<T> = catalog
                    .iter()
                    .filter(|item| (self.matches_search)(*item, query.as_str()))
                    .cloned()
                    .collect();
                let total = items.len() as u64;
                ListPage::new(items, total)
            },
            FetchPlan::ByCategory { category } => {
                let items: Vec<T> = catalog
                    .iter()
                    .filter(|item| (self.matches_category)(*item, category.as_str()))
                    .cloned()
                    .collect();
                let total = items.len() as u64;
                ListPage::new(items, total)
            },
        }
    }

    fn unsupported(&self, mode: &str) -> SourceFuture<'_, T> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let message = format!("{} cannot be {}", self.features.label, mode);
        Box::pin(async move { Err(Error::invalid_argument(message)) })
    }
}

impl MockDataSource<Product> {
    /// A product catalog with search and category filtering.
    pub fn products(catalog: impl IntoIterator<Item = Product>) -> Self {
        Self::new("products", catalog)
            .with_features(SourceFeatures::paged("products").with_search().with_category())
            .with_category_matcher(|product, slug| product.category == slug)
    }
}

impl MockDataSource<Cart> {
    /// A paged-only cart collection.
    pub fn carts(catalog: impl IntoIterator<Item = Cart>) -> Self {
        Self::new("carts", catalog)
    }
}

impl MockDataSource<User> {
    /// A user directory searchable by name and username.
    pub fn users(catalog: impl IntoIterator<Item = User>) -> Self {
        Self::new("users", catalog)
            .with_features(SourceFeatures::paged("users").with_search())
            .with_search_matcher(|user, query| {
                let query = query.to_lowercase();
                [&user.first_name, &user.last_name, &user.username]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            })
    }
}

impl<T> DataSource for MockDataSource<T>
where
    T: Sortable + Clone + Send + Sync + 'static,
{
    type Item = T;

    fn features(&self) -> SourceFeatures {
        self.features
    }

    fn fetch_page(&self, offset: u64, limit: u64) -> SourceFuture<'_, T> {
        self.serve(FetchPlan::Paged { offset, limit })
    }

    fn search(&self, query: &str) -> SourceFuture<'_, T> {
        if !self.features.search {
            return self.unsupported("searched");
        }
        self.serve(FetchPlan::Search {
            query: query.to_string(),
        })
    }

    fn by_category(&self, category: &str) -> SourceFuture<'_, T> {
        if !self.features.category {
            return self.unsupported("filtered by category");
        }
        self.serve(FetchPlan::ByCategory {
            category: category.to_string(),
        })
    }
}

impl<T> std::fmt::Debug for MockDataSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDataSource")
            .field("features", &self.features)
            .field("requests", &self.requests.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
