//! Configuration types for the shopadmin SDK.
//!
//! This module provides configuration options for:
//! - [`PageSizePolicy`]: viewport width to page size mapping
//! - [`ListConfig`]: list coordinator defaults (policy, notice lifetime, initial width)
//! - [`EnvConfig`]: client settings read from the environment

mod env;
mod list;
mod page_size;

pub use env::EnvConfig;
pub(crate) use env::DEFAULT_TIMEOUT;
pub use list::ListConfig;
pub use page_size::PageSizePolicy;
