//! The list coordinator: query state in, one Data Source call out.

use std::time::Instant;

use super::{DataSource, FetchPlan, Notice, Pagination, QueryState, SortKey, SourceFeatures, total_pages};
use crate::Error;
use crate::config::ListConfig;
use crate::types::ListPage;

/// Identifies one dispatched fetch.
///
/// Generations increase monotonically per coordinator. Only the result of
/// the most recently dispatched generation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    plan: FetchPlan,
}

impl FetchTicket {
    /// Returns the generation number.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the call this fetch must issue.
    pub fn plan(&self) -> &FetchPlan {
        &self.plan
    }
}

/// What applying a fetch result did.
#[derive(Debug)]
pub enum Outcome {
    /// The page was stored and sorted.
    Loaded {
        /// Items on the page.
        count: usize,
        /// Server-reported total.
        total: u64,
        /// The current page was past the last page and was pulled back.
        page_clamped: bool,
    },
    /// The fetch failed; a danger notice was raised and the previous page kept.
    Failed {
        /// The underlying error.
        error: Error,
    },
    /// A newer fetch was dispatched after this one; the result was dropped.
    Stale {
        /// Generation of the dropped result.
        generation: u64,
        /// Generation currently awaited.
        latest: u64,
    },
}

impl Outcome {
    /// Returns `true` for [`Outcome::Loaded`].
    pub fn is_loaded(&self) -> bool {
        matches!(self, Outcome::Loaded { .. })
    }

    /// Returns `true` for [`Outcome::Stale`].
    pub fn is_stale(&self) -> bool {
        matches!(self, Outcome::Stale { .. })
    }
}

/// Owns the query state for one entity list and turns it into fetches.
///
/// Mutators only change state and report whether a fetch is now due; the
/// caller then runs [`refresh`](Self::refresh), or splits it into
/// [`begin_fetch`](Self::begin_fetch) and
/// [`complete_fetch`](Self::complete_fetch) when fetches overlap.
///
/// ## Example
///
/// ```rust
/// use shopadmin::listing::{ListCoordinator, SortKey};
/// use shopadmin::testing::MockDataSource;
/// use shopadmin::types::Product;
///
/// # tokio_test_block(async {
/// let source = MockDataSource::products((1..=25).map(|id| Product {
///     id,
///     price: id as f64,
///     ..Default::default()
/// }));
/// let mut list = ListCoordinator::new(source);
///
/// list.mount(1280).await;
/// assert_eq!(list.items().len(), 12);
///
/// if list.set_sort_key(SortKey::PriceDesc) {
///     list.refresh().await;
/// }
/// assert_eq!(list.items()[0].id, 12);
/// # });
/// # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub struct ListCoordinator<S: DataSource> {
    source: S,
    config: ListConfig,
    state: QueryState,
    search_draft: String,
    viewport_width: u32,
    server_items: Vec<S::Item>,
    items: Vec<S::Item>,
    total: u64,
    loading: bool,
    notice: Option<Notice>,
    next_generation: u64,
    latest_generation: Option<u64>,
}

impl<S: DataSource> ListCoordinator<S> {
    /// Creates a coordinator with [`ListConfig::default`].
    pub fn new(source: S) -> Self {
        Self::with_config(source, ListConfig::default())
    }

    /// Creates a coordinator. The page size follows `config.initial_width`
    /// until [`mount`](Self::mount) or a resize says otherwise.
    pub fn with_config(source: S, config: ListConfig) -> Self {
        let state = QueryState::new(config.initial_page_size());
        Self {
            source,
            viewport_width: config.initial_width,
            config,
            state,
            search_draft: String::new(),
            server_items: Vec::new(),
            items: Vec::new(),
            total: 0,
            loading: false,
            notice: None,
            next_generation: 0,
            latest_generation: None,
        }
    }

    // ---- Accessors ----

    /// Returns the Data Source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Returns the supported query modes.
    pub fn features(&self) -> SourceFeatures {
        self.source.features()
    }

    /// Returns the committed query state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Current page, starting at 1.
    pub fn page(&self) -> u32 {
        self.state.page
    }

    /// Items per page.
    pub fn page_size(&self) -> u32 {
        self.state.page_size
    }

    /// Last viewport width seen.
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Uncommitted search input.
    pub fn search_draft(&self) -> &str {
        &self.search_draft
    }

    /// The current page in display order.
    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    /// The current page in server order.
    pub fn server_items(&self) -> &[S::Item] {
        &self.server_items
    }

    /// Server-reported total for the last applied result.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Pages available at the current page size.
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.state.page_size)
    }

    /// The pagination bar, or `None` when everything fits on one page.
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::new(self.state.page, self.total_pages())
    }

    /// `true` while the latest dispatched fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The visible notice, if one was raised and has not expired.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice_at(Instant::now())
    }

    /// The notice as seen at `now`.
    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired_at(now))
    }

    /// Hides the notice before it expires.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ---- Mutators ----

    /// Records the mount-time viewport. A fetch is always due afterwards.
    pub async fn mount(&mut self, width: u32) -> Outcome {
        self.set_viewport_width(width);
        self.refresh().await
    }

    /// Handles a resize. Returns `true` when the page size changed, in
    /// which case the page is reset to 1 and a fetch is due.
    pub fn set_viewport_width(&mut self, width: u32) -> bool {
        self.viewport_width = width;
        let page_size = self.config.page_size_policy.page_size_for(width).max(1);
        if page_size == self.state.page_size {
            return false;
        }
        tracing::debug!(width, from = self.state.page_size, to = page_size, "page size changed");
        self.state.page_size = page_size;
        self.state.page = 1;
        true
    }

    /// Moves to `page`. Returns `true` when the page changed.
    ///
    /// Zero becomes 1; once a total is known the page is kept within it.
    pub fn set_page(&mut self, page: u32) -> bool {
        let mut page = page.max(1);
        let pages = self.total_pages();
        if pages > 0 {
            page = page.min(pages);
        }
        if page == self.state.page {
            return false;
        }
        self.state.page = page;
        true
    }

    /// Selects a category, or clears it with `None`. The page resets to 1.
    ///
    /// Returns `true` when the filter changed. An empty slug clears it.
    pub fn set_category(&mut self, category: Option<String>) -> bool {
        let category = category.filter(|c| !c.is_empty());
        if category == self.state.category_filter {
            return false;
        }
        self.state.category_filter = category;
        self.state.page = 1;
        true
    }

    /// Changes the sort order and re-sorts the current page immediately.
    ///
    /// Returns `true` when the key changed; the list is refetched on sort
    /// changes so the order applies to fresh data too.
    pub fn set_sort_key(&mut self, sort_key: SortKey) -> bool {
        if sort_key == self.state.sort_key {
            return false;
        }
        self.state.sort_key = sort_key;
        self.items = sort_key.apply(&self.server_items);
        true
    }

    /// Updates the search input without dispatching anything.
    pub fn set_search_draft(&mut self, text: impl Into<String>) {
        self.search_draft = text.into();
    }

    /// Commits the search input. The page resets to 1 and a fetch is due.
    ///
    /// Submitting a blank draft clears an active search.
    pub fn submit_search(&mut self) -> bool {
        self.state.search_term = self.search_draft.trim().to_string();
        self.state.page = 1;
        true
    }

    // ---- Fetching ----

    /// Marks a fetch as in flight and returns its ticket.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.latest_generation = Some(generation);
        self.loading = true;

        let plan = self.state.plan();
        tracing::debug!(
            source = self.source.features().label,
            generation,
            plan = %plan,
            "dispatching fetch"
        );
        FetchTicket { generation, plan }
    }

    /// Applies the result of the fetch `ticket` was issued for.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<ListPage<S::Item>, Error>) -> Outcome {
        let latest = self.latest_generation.unwrap_or(0);
        if ticket.generation != latest {
            tracing::warn!(
                source = self.source.features().label,
                generation = ticket.generation,
                latest,
                "discarding stale fetch result"
            );
            return Outcome::Stale {
                generation: ticket.generation,
                latest,
            };
        }
        self.loading = false;

        match result {
            Ok(page) => self.apply_page(page),
            Err(error) => {
                let label = self.source.features().label;
                tracing::warn!(source = label, plan = %ticket.plan, error = %error, "fetch failed");
                self.notice = Some(Notice::danger(format!("Failed to fetch {}", label)).with_ttl(self.config.notice_ttl));
                Outcome::Failed { error }
            },
        }
    }

    /// Fetches the current query state and applies the result.
    pub async fn refresh(&mut self) -> Outcome {
        let ticket = self.begin_fetch();
        let result = self.source.fetch_plan(&ticket.plan).await;
        self.complete_fetch(ticket, result)
    }

    fn apply_page(&mut self, page: ListPage<S::Item>) -> Outcome {
        self.total = page.total;
        self.items = self.state.sort_key.apply(&page.items);
        self.server_items = page.items;

        let last = self.total_pages().max(1);
        let page_clamped = self.state.page > last;
        if page_clamped {
            tracing::debug!(from = self.state.page, to = last, "clamping page to last page");
            self.state.page = last;
        }

        Outcome::Loaded {
            count: self.items.len(),
            total: self.total,
            page_clamped,
        }
    }
}

impl<S: DataSource + std::fmt::Debug> std::fmt::Debug for ListCoordinator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListCoordinator")
            .field("source", &self.source)
            .field("state", &self.state)
            .field("items", &self.items.len())
            .field("total", &self.total)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
