//! Query state and fetch-plan derivation.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Client-side ordering applied to a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Server order.
    #[default]
    None,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best rated first.
    RatingDesc,
    /// Alphabetical by title.
    TitleAsc,
}

impl SortKey {
    /// Every key, in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::TitleAsc,
    ];

    /// Returns the wire name. `None` renders as the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::TitleAsc => "title-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortKey::None),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating-desc" | "rating" => Ok(SortKey::RatingDesc),
            "title-asc" | "title" => Ok(SortKey::TitleAsc),
            other => Err(Error::invalid_argument(format!("unknown sort key '{}'", other))),
        }
    }
}

/// The one Data Source call a [`QueryState`] resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchPlan {
    /// Free-text search; paging and category are ignored.
    Search {
        /// Trimmed, non-empty search term.
        query: String,
    },
    /// One category; paging is ignored.
    ByCategory {
        /// Category slug.
        category: String,
    },
    /// One page of the unfiltered collection.
    Paged {
        /// Items to skip.
        offset: u64,
        /// Items to fetch.
        limit: u64,
    },
}

impl fmt::Display for FetchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPlan::Search { query } => write!(f, "search(q={})", query),
            FetchPlan::ByCategory { category } => write!(f, "category({})", category),
            FetchPlan::Paged { offset, limit } => write!(f, "page(offset={}, limit={})", offset, limit),
        }
    }
}

/// User-controlled parameters that determine the next fetch.
///
/// `page` is 1-based and `page_size` is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Committed search term; empty means no search.
    pub search_term: String,
    /// Selected category slug.
    pub category_filter: Option<String>,
    /// Client-side ordering.
    pub sort_key: SortKey,
    /// Current page, starting at 1.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

impl QueryState {
    /// Creates the mount-time state: page 1, no search, filter or sort.
    pub fn new(page_size: u32) -> Self {
        Self {
            search_term: String::new(),
            category_filter: None,
            sort_key: SortKey::None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Derives the Data Source call. Search beats category beats paging.
    ///
    /// ```rust
    /// use shopadmin::listing::{FetchPlan, QueryState};
    ///
    /// let mut state = QueryState::new(12);
    /// state.page = 3;
    /// assert_eq!(state.plan(), FetchPlan::Paged { offset: 24, limit: 12 });
    ///
    /// state.category_filter = Some("laptops".into());
    /// state.search_term = "phone".into();
    /// assert_eq!(state.plan(), FetchPlan::Search { query: "phone".into() });
    /// ```
    pub fn plan(&self) -> FetchPlan {
        let term = self.search_term.trim();
        if !term.is_empty() {
            return FetchPlan::Search {
                query: term.to_string(),
            };
        }

        if let Some(category) = self.category_filter.as_deref().filter(|c| !c.is_empty()) {
            return FetchPlan::ByCategory {
                category: category.to_string(),
            };
        }

        FetchPlan::Paged {
            offset: self.offset(),
            limit: u64::from(self.page_size),
        }
    }
}
