//! Error types for the shopadmin SDK.
//!
//! Every fallible operation returns [`Error`], which carries an [`ErrorKind`]
//! for matching, a human-readable message, and optionally the request ID and
//! HTTP status of the call that failed.
//!
//! ## Where errors stop
//!
//! API clients (`ProductsClient`, `AuthClient`, ...) return `Err` for every
//! failure. The list coordinator does not: it converts a failed fetch into a
//! transient [`Notice`](crate::listing::Notice) and keeps the previous page on
//! screen.
//!
//! ```rust,ignore
//! // API call - errors propagate
//! let product = client.products().get(1).await?;
//!
//! // Coordinator - errors become notices
//! let outcome = coordinator.refresh().await;
//! if let Some(notice) = coordinator.notice() {
//!     eprintln!("{}", notice.message());
//! }
//! ```

mod core;
mod kind;

pub use core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for shopadmin operations.
pub type Result<T> = std::result::Result<T, Error>;
