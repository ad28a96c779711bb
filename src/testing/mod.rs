//! Testing utilities for code built on the SDK.
//!
//! - [`MockDataSource`]: an in-memory [`DataSource`](crate::listing::DataSource)
//!   that records calls and injects failures and delays
//! - [`MemoryTokenStore`](crate::auth::MemoryTokenStore): a session store
//!   that never touches disk
//!
//! ## Quick Start
//!
//! ```rust
//! use shopadmin::listing::ListCoordinator;
//! use shopadmin::testing::MockDataSource;
//! use shopadmin::types::User;
//!
//! let users = MockDataSource::users(vec![User::default(); 30]);
//! let list = ListCoordinator::new(users.clone());
//! assert_eq!(list.page(), 1);
//! assert_eq!(users.request_count(), 0);
//! ```

mod mock_source;

pub use mock_source::{MockDataSource, MockGate};
