//! Landing-page totals.

use std::future::IntoFuture;

use serde::Serialize;

use crate::{Client, Error};

/// Collection sizes shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    /// Products in the catalog.
    pub products: u64,
    /// Carts on record.
    pub carts: u64,
    /// Registered users.
    pub users: u64,
    /// Product categories.
    pub categories: u64,
}

impl DashboardStats {
    /// Fetches all four figures concurrently.
    ///
    /// Totals come from `limit=0` list calls; the category count from the
    /// category list. Any failure fails the whole call.
    ///
    /// ```rust,no_run
    /// # async fn example(client: shopadmin::Client) -> Result<(), shopadmin::Error> {
    /// use shopadmin::dashboard::DashboardStats;
    ///
    /// let stats = DashboardStats::fetch(&client).await?;
    /// println!("{} products in {} categories", stats.products, stats.categories);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch(client: &Client) -> Result<Self, Error> {
        let products = client.products();
        let (products_page, carts_page, users_page, categories) = futures::try_join!(
            products.list().limit(0).into_future(),
            client.carts().list().limit(0).into_future(),
            client.users().list().limit(0).into_future(),
            products.categories(),
        )?;

        let stats = Self {
            products: products_page.total,
            carts: carts_page.total,
            users: users_page.total,
            categories: categories.len() as u64,
        };
        tracing::debug!(?stats, "dashboard stats loaded");
        Ok(stats)
    }
}
