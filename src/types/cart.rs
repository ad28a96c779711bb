//! Shopping cart records.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A customer's shopping cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart ID.
    pub id: u64,
    /// Owning user.
    pub user_id: u64,
    /// Line items.
    #[serde(default)]
    pub products: Vec<CartLine>,
    /// Sum of line totals before discount.
    #[serde(default)]
    pub total: f64,
    /// Sum of line totals after discount.
    #[serde(default)]
    pub discounted_total: f64,
    /// Number of distinct products.
    #[serde(default)]
    pub total_products: u64,
    /// Sum of quantities.
    #[serde(default)]
    pub total_quantity: u64,
}

/// One product line inside a cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID.
    pub id: u64,
    /// Product title.
    #[serde(default)]
    pub title: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Quantity in the cart.
    #[serde(default)]
    pub quantity: u64,
    /// `price * quantity`.
    #[serde(default)]
    pub total: f64,
    /// Line total after discount.
    #[serde(default)]
    pub discounted_total: f64,
}

impl Resource for Cart {
    const COLLECTION: &'static str = "carts";
    const NOUN: &'static str = "cart";
}
