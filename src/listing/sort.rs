//! Page-local client-side sorting.

use std::cmp::Ordering;

use super::SortKey;
use crate::types::{Cart, Product, User};

/// Fields a [`SortKey`] comparator may read.
///
/// Every accessor defaults to `None`. Items without the field sort after
/// items that have it, whatever the direction; among themselves they keep
/// their server order.
pub trait Sortable {
    /// Unit price.
    fn price(&self) -> Option<f64> {
        None
    }

    /// Average rating.
    fn rating(&self) -> Option<f64> {
        None
    }

    /// Display title. Compared case-insensitively, with byte order as the
    /// tiebreak; this is not locale collation.
    fn title(&self) -> Option<&str> {
        None
    }
}

impl Sortable for Product {
    fn price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn title(&self) -> Option<&str> {
        Some(&self.title)
    }
}

impl Sortable for Cart {
    fn price(&self) -> Option<f64> {
        Some(self.total)
    }
}

impl Sortable for User {
    fn title(&self) -> Option<&str> {
        Some(&self.username)
    }
}

/// Orders present values with `cmp`; missing values go last.
fn present_first<V>(a: Option<V>, b: Option<V>, cmp: impl FnOnce(V, V) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn ascending(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

fn by_title(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

impl SortKey {
    /// Compares two items under this key.
    pub fn compare<T: Sortable>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::PriceAsc => present_first(a.price(), b.price(), ascending),
            SortKey::PriceDesc => present_first(a.price(), b.price(), descending),
            SortKey::RatingDesc => present_first(a.rating(), b.rating(), descending),
            SortKey::TitleAsc => present_first(a.title(), b.title(), by_title),
        }
    }

    /// Returns a sorted copy of `items`. The sort is stable; `None` returns
    /// the input order.
    pub fn apply<T: Sortable + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut sorted = items.to_vec();
        if *self != SortKey::None {
            sorted.sort_by(|a, b| self.compare(a, b));
        }
        sorted
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn product(id: u64, title: &str, price: f64, rating: f64) -> Product {
        Product {
            id,
            title: title.into(),
            price,
            rating,
            ..Default::default()
        }
    }

    fn ids(items: &[Product]) -> Vec<u64> {
        items.iter().map(|p| p.id).collect()
    }

    fn page() -> Vec<Product> {
        vec![
            product(1, "banana", 3.0, 4.1),
            product(2, "Apple", 1.0, 4.9),
            product(3, "cherry", 2.0, 3.5),
            product(4, "apple", 5.0, 4.0),
        ]
    }

    #[test]
    fn test_price_orders() {
        assert_eq!(ids(&SortKey::PriceAsc.apply(&page())), vec![2, 3, 1, 4]);
        assert_eq!(ids(&SortKey::PriceDesc.apply(&page())), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_rating_descending() {
        assert_eq!(ids(&SortKey::RatingDesc.apply(&page())), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_title_ignores_case_first() {
        // "Apple" and "apple" tie case-insensitively; byte order breaks the tie.
        assert_eq!(ids(&SortKey::TitleAsc.apply(&page())), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_none_keeps_server_order() {
        assert_eq!(ids(&SortKey::None.apply(&page())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_fields_keep_position() {
        let users = vec![
            User {
                id: 1,
                username: "zed".into(),
                ..Default::default()
            },
            User {
                id: 2,
                username: "amy".into(),
                ..Default::default()
            },
        ];
        let by_price: Vec<u64> = SortKey::PriceAsc.apply(&users).iter().map(|u| u.id).collect();
        assert_eq!(by_price, vec![1, 2]);

        let by_title: Vec<u64> = SortKey::TitleAsc.apply(&users).iter().map(|u| u.id).collect();
        assert_eq!(by_title, vec![2, 1]);
    }

    #[derive(Clone)]
    struct Listing {
        id: u64,
        price: Option<f64>,
    }

    impl Sortable for Listing {
        fn price(&self) -> Option<f64> {
            self.price
        }
    }

    fn listing_ids(items: &[Listing]) -> Vec<u64> {
        items.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_unpriced_items_sort_last_both_ways() {
        let items = vec![
            Listing { id: 1, price: Some(5.0) },
            Listing { id: 2, price: None },
            Listing { id: 3, price: Some(1.0) },
            Listing { id: 4, price: None },
            Listing { id: 5, price: Some(3.0) },
        ];
        assert_eq!(listing_ids(&SortKey::PriceAsc.apply(&items)), vec![3, 5, 1, 2, 4]);
        assert_eq!(listing_ids(&SortKey::PriceDesc.apply(&items)), vec![1, 5, 3, 2, 4]);
    }

    #[test]
    fn test_input_not_mutated() {
        let items = page();
        let _ = SortKey::PriceDesc.apply(&items);
        assert_eq!(ids(&items), vec![1, 2, 3, 4]);
    }

    proptest! {
        // Sort round-trip: with distinct prices, desc is exactly the reverse of asc.
        #[test]
        fn prop_price_desc_reverses_asc(prices in prop::collection::hash_set(0u32..10_000, 0..30)) {
            let items: Vec<Product> = prices
                .into_iter()
                .enumerate()
                .map(|(i, cents)| product(i as u64, "p", f64::from(cents) / 100.0, 0.0))
                .collect();

            let mut asc = ids(&SortKey::PriceAsc.apply(&items));
            let desc = ids(&SortKey::PriceDesc.apply(&items));
            asc.reverse();
            prop_assert_eq!(asc, desc);
        }

        #[test]
        fn prop_sort_is_permutation(prices in prop::collection::vec(0u32..100, 0..30)) {
            let items: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, cents)| product(i as u64, "p", f64::from(*cents), 0.0))
                .collect();

            let mut sorted = ids(&SortKey::PriceAsc.apply(&items));
            sorted.sort_unstable();
            prop_assert_eq!(sorted, ids(&items));
        }

        #[test]
        fn prop_partial_prices_sort_consistently(prices in prop::collection::vec(prop::option::of(0u32..50), 0..40)) {
            let items: Vec<Listing> = prices
                .iter()
                .enumerate()
                .map(|(i, cents)| Listing { id: i as u64, price: cents.map(f64::from) })
                .collect();

            let sorted = SortKey::PriceAsc.apply(&items);
            let first_missing = sorted.iter().position(|l| l.price.is_none()).unwrap_or(sorted.len());
            prop_assert!(sorted[first_missing..].iter().all(|l| l.price.is_none()));
            prop_assert!(sorted[..first_missing].windows(2).all(|w| w[0].price <= w[1].price));
        }
    }
}
