//! Product records.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A product in the catalog.
///
/// Only `id` and `title` are guaranteed by the API; everything else defaults
/// when absent so partially populated records (e.g. the echo returned by
/// `POST /products/add`) still decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Discount in percent.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average rating (0-5).
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: u64,
    /// Brand, when the product has one.
    #[serde(default)]
    pub brand: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Resource for Product {
    const COLLECTION: &'static str = "products";
    const NOUN: &'static str = "product";
}
