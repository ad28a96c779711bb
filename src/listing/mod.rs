//! Paginated, searchable, sortable entity lists.
//!
//! A [`ListCoordinator`] owns the user-controlled [`QueryState`] for one list,
//! derives the single [`DataSource`] call it implies, and applies the result:
//!
//! 1. A non-blank search term issues a search; paging and category are ignored.
//! 2. Otherwise a category filter lists that category.
//! 3. Otherwise one page is fetched at `offset = (page - 1) * page_size`.
//!
//! Sorting is client-side and page-local.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shopadmin::Client;
//! use shopadmin::listing::{ListCoordinator, SortKey};
//!
//! # async fn example() -> Result<(), shopadmin::Error> {
//! let client = Client::builder().url("https://dummyjson.com").build()?;
//! let mut products = ListCoordinator::new(client.products());
//!
//! products.mount(1280).await;
//! if products.set_sort_key(SortKey::PriceAsc) {
//!     products.refresh().await;
//! }
//! for product in products.items() {
//!     println!("{} {}", product.title, product.price);
//! }
//! # Ok(())
//! # }
//! ```

mod coordinator;
mod notice;
mod pagination;
mod query;
mod sort;
mod source;

pub use coordinator::{FetchTicket, ListCoordinator, Outcome};
pub use notice::{DEFAULT_NOTICE_TTL, Notice, Severity};
pub use pagination::{PageControl, Pagination, total_pages};
pub use query::{FetchPlan, QueryState, SortKey};
pub use sort::Sortable;
pub use source::{DataSource, SourceFeatures, SourceFuture};
