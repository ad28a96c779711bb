//! List coordinator integration tests over HTTP.

use serde_json::json;
use shopadmin::listing::{ListCoordinator, Outcome, SortKey};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{StoreApi, catalog};

fn ids(items: &[shopadmin::Product]) -> Vec<u64> {
    items.iter().map(|p| p.id).collect()
}

/// 25 products at 12 per page: three pages, the last holding one item.
#[tokio::test]
async fn test_products_paging() {
    let api = StoreApi::start().await;
    api.serve_products(catalog(25)).await;
    let mut list = ListCoordinator::new(api.client.products());

    assert!(list.mount(1280).await.is_loaded());
    assert_eq!(list.items().len(), 12);
    assert_eq!(list.total(), 25);

    let bar = list.pagination().expect("three pages need a bar");
    assert_eq!(bar.pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(bar.previous().disabled);

    assert!(list.set_page(bar.last().target));
    list.refresh().await;
    assert_eq!(ids(list.items()), vec![25]);
    assert!(list.pagination().unwrap().next().disabled);
}

/// A narrow viewport halves the page size and resets to page 1.
#[tokio::test]
async fn test_viewport_drives_page_size() {
    let api = StoreApi::start().await;
    api.serve_products(catalog(25)).await;
    let mut list = ListCoordinator::new(api.client.products());

    list.mount(400).await;
    assert_eq!(list.page_size(), 6);
    assert_eq!(list.total_pages(), 5);

    list.set_page(3);
    list.refresh().await;
    assert_eq!(ids(list.items()), vec![13, 14, 15, 16, 17, 18]);

    assert!(list.set_viewport_width(1400));
    assert_eq!(list.page(), 1);
    list.refresh().await;
    assert_eq!(list.items().len(), 12);

    assert!(!list.set_viewport_width(1200));
}

/// Category filtering, then a search that overrides it, then clearing the search.
#[tokio::test]
async fn test_category_and_search() {
    let api = StoreApi::start().await;
    api.serve_products(catalog(30)).await;
    let mut list = ListCoordinator::new(api.client.products());
    list.mount(1280).await;

    assert!(list.set_category(Some("laptops".into())));
    list.refresh().await;
    assert_eq!(list.total(), 15);
    assert_eq!(list.items().len(), 15);
    assert!(list.items().iter().all(|p| p.category == "laptops"));

    list.set_search_draft("item 2");
    list.submit_search();
    list.refresh().await;
    // "Item 2" and "Item 20".."Item 29", across both categories.
    assert_eq!(list.total(), 11);
    assert!(list.items().iter().any(|p| p.category == "smartphones"));

    list.set_search_draft("  ");
    list.submit_search();
    list.refresh().await;
    assert_eq!(list.total(), 15);
}

/// Sorting reorders the fetched page only.
#[tokio::test]
async fn test_sort_is_page_local() {
    let api = StoreApi::start().await;
    api.serve_products(catalog(25)).await;
    let mut list = ListCoordinator::new(api.client.products());
    list.mount(1280).await;

    assert!(list.set_sort_key(SortKey::PriceDesc));
    assert_eq!(list.items()[0].id, 12);

    list.set_page(2);
    list.refresh().await;
    assert_eq!(list.items()[0].id, 24);
    assert_eq!(list.items().last().unwrap().id, 13);

    list.set_sort_key(SortKey::None);
    assert_eq!(list.items()[0].id, 13);
}

/// A server failure raises a notice and keeps the last good page.
#[tokio::test]
async fn test_failure_keeps_page() {
    let api = StoreApi::start().await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "carts": [
                {"id": 1, "userId": 33, "total": 103_774.85, "products": []},
                {"id": 2, "userId": 142, "total": 4_794.8, "products": []}
            ],
            "total": 50, "skip": 0, "limit": 2
        })))
        .up_to_n_times(1)
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api.server)
        .await;

    let mut list = ListCoordinator::new(api.client.carts());
    list.mount(1280).await;
    assert_eq!(list.items().len(), 2);

    list.set_page(2);
    match list.refresh().await {
        Outcome::Failed { error } => assert_eq!(error.status(), Some(500)),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(list.items().len(), 2);
    assert_eq!(list.notice().unwrap().message(), "Failed to fetch carts");
}

/// Users are searchable but have no categories.
#[tokio::test]
async fn test_user_search() {
    let api = StoreApi::start().await;
    api.serve_users(vec![
        json!({"id": 1, "firstName": "Emily", "lastName": "Johnson", "username": "emilys"}),
        json!({"id": 2, "firstName": "Michael", "lastName": "Williams", "username": "michaelw"}),
        json!({"id": 3, "firstName": "Sophia", "lastName": "Brown", "username": "sophiab"}),
    ])
    .await;
    let mut list = ListCoordinator::new(api.client.users());
    list.mount(1280).await;
    assert_eq!(list.total(), 3);

    list.set_search_draft("WILL");
    list.submit_search();
    list.refresh().await;
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].username, "michaelw");

    assert!(list.set_sort_key(SortKey::TitleAsc));
    assert!(!list.features().category);
}

/// Carts are paged only; a search is reported, not sent.
#[tokio::test]
async fn test_cart_search_unsupported() {
    let api = StoreApi::start().await;
    api.serve_carts(vec![json!({"id": 1, "userId": 5, "total": 10.0, "products": []})]).await;
    let mut list = ListCoordinator::new(api.client.carts());
    list.mount(1280).await;

    list.set_search_draft("anything");
    list.submit_search();
    assert!(matches!(list.refresh().await, Outcome::Failed { .. }));
    assert_eq!(list.items().len(), 1);
}
