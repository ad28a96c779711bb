//! List envelope decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;

/// One fetched batch of items plus the server's reported total.
///
/// `total` is the count for the filter that produced this page (the search
/// term or category), not the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    /// The items in server order.
    pub items: Vec<T>,
    /// Server-reported count for the active filter.
    pub total: u64,
    /// Offset the server applied.
    pub skip: u64,
    /// Limit the server applied.
    pub limit: u64,
}

impl<T> ListPage<T> {
    /// Creates a page from its parts.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        let limit = items.len() as u64;
        Self {
            items,
            total,
            skip: 0,
            limit,
        }
    }

    /// Returns `true` if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            skip: 0,
            limit: 0,
        }
    }
}

impl<T: DeserializeOwned> ListPage<T> {
    /// Decodes a list envelope whose items sit under `key`.
    ///
    /// ```rust
    /// use shopadmin::types::ListPage;
    ///
    /// let body = serde_json::json!({"users": [1, 2], "total": 30, "skip": 0, "limit": 2});
    /// let page: ListPage<u32> = ListPage::from_envelope("users", body).unwrap();
    /// assert_eq!(page.items, vec![1, 2]);
    /// assert_eq!(page.total, 30);
    /// ```
    pub fn from_envelope(key: &str, mut body: serde_json::Value) -> Result<Self, Error> {
        let raw_items = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| Error::invalid_response(format!("missing '{}' in list response", key)))?;
        let items: Vec<T> = serde_json::from_value(raw_items)?;

        let count = |field: &str| body.get(field).and_then(serde_json::Value::as_u64);
        let len = items.len() as u64;

        Ok(Self {
            total: count("total").unwrap_or(len),
            skip: count("skip").unwrap_or(0),
            limit: count("limit").unwrap_or(len),
            items,
        })
    }
}
