//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use shopadmin::prelude::*;
//! ```
//!
//! This provides access to:
//! - Client and entity API types
//! - Error types
//! - Authentication types
//! - The list coordinator and its query types

pub use crate::{
    api::{CartsClient, ProductsClient, UserDraft, UsersClient},
    auth::{AuthClient, AuthGate, GateDecision, LoginCredentials, Session},
    client::{Client, ClientBuilder},
    config::{ListConfig, PageSizePolicy},
    error::{Error, ErrorKind, Result},
    forms::{CartForm, FormMode, ProductField, ProductForm},
    listing::{DataSource, ListCoordinator, Notice, Pagination, SortKey},
    types::{Cart, Category, ListPage, Product, User},
};
