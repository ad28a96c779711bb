//! Create, edit and delete flows through the forms.

use serde_json::json;
use shopadmin::forms::{CartAction, CartForm, FormMode, ProductField, ProductForm, delete_with_notice};
use shopadmin::listing::Severity;
use shopadmin::Product;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::StoreApi;

fn desk_lamp_form() -> ProductForm {
    let mut form = ProductForm::new();
    form.apply(ProductField::Title("Desk Lamp".into()));
    form.apply(ProductField::Brand("Lumen".into()));
    form.apply(ProductField::Description("Adjustable arm".into()));
    form.apply(ProductField::Category("home-decoration".into()));
    form.apply(ProductField::Price("19.99".into()));
    form.apply(ProductField::Stock("40".into()));
    form
}

#[tokio::test]
async fn test_create_product() {
    let api = StoreApi::start().await;
    Mock::given(method("POST"))
        .and(path("/products/add"))
        .and(body_json(json!({
            "title": "Desk Lamp",
            "description": "Adjustable arm",
            "price": 19.99,
            "brand": "Lumen",
            "category": "home-decoration",
            "stock": 40
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 195, "title": "Desk Lamp", "price": 19.99, "category": "home-decoration"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let outcome = desk_lamp_form().submit(&api.client.products()).await;
    assert!(outcome.is_saved());
    assert_eq!(outcome.notice.message(), "Product added");
    assert_eq!(outcome.result.unwrap().id, 195);
}

#[tokio::test]
async fn test_edit_product() {
    let api = StoreApi::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "title": "Essence Mascara Lash Princess", "price": 7.49
        })))
        .mount(&api.server)
        .await;

    let existing = Product {
        id: 1,
        title: "Essence Mascara Lash Princess".into(),
        description: "Volumizing mascara".into(),
        category: "beauty".into(),
        price: 9.99,
        stock: 5,
        brand: Some("Essence".into()),
        ..Default::default()
    };
    let mut form = ProductForm::from_product(&existing);
    assert_eq!(form.mode(), FormMode::Edit(1));
    form.apply(ProductField::Price("7.49".into()));

    let outcome = form.submit(&api.client.products()).await;
    assert_eq!(outcome.notice.message(), "Product updated");
    assert_eq!(outcome.result.unwrap().price, 7.49);
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let api = StoreApi::start().await;
    let mut form = desk_lamp_form();
    form.apply(ProductField::Price("cheap".into()));

    let outcome = form.submit(&api.client.products()).await;
    assert!(!outcome.is_saved());
    assert_eq!(outcome.notice.message(), "price must be a number");
    assert!(api.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_failure_notice() {
    let api = StoreApi::start().await;
    Mock::given(method("PUT"))
        .and(path("/carts/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Cart with id '9999' not found"})))
        .mount(&api.server)
        .await;

    let mut form = CartForm::from_cart(&shopadmin::Cart {
        id: 9999,
        user_id: 5,
        products: vec![shopadmin::types::CartLine {
            id: 144,
            quantity: 2,
            ..Default::default()
        }],
        ..Default::default()
    });
    form.apply(CartAction::SetLineQuantity { index: 0, quantity: 3 });

    let outcome = form.submit(&api.client.carts()).await;
    assert_eq!(outcome.notice.message(), "Failed to update cart");
    assert_eq!(outcome.notice.severity(), Severity::Danger);
    assert_eq!(outcome.result.unwrap_err().status(), Some(404));
}

#[tokio::test]
async fn test_create_cart() {
    let api = StoreApi::start().await;
    Mock::given(method("POST"))
        .and(path("/carts/add"))
        .and(body_json(json!({
            "userId": 5,
            "products": [{"id": 144, "quantity": 4}, {"id": 98, "quantity": 1}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 51, "userId": 5, "total": 2_499.0, "products": []
        })))
        .mount(&api.server)
        .await;

    let mut form = CartForm::new();
    form.apply(CartAction::SetUser(Some(5)));
    form.apply(CartAction::SetLineProduct {
        index: 0,
        product_id: Some(144),
    });
    form.apply(CartAction::SetLineQuantity { index: 0, quantity: 4 });
    form.apply(CartAction::AddLine);
    form.apply(CartAction::SetLineProduct {
        index: 1,
        product_id: Some(98),
    });

    let outcome = form.submit(&api.client.carts()).await;
    assert_eq!(outcome.notice.message(), "Cart added");
    assert_eq!(outcome.result.unwrap().id, 51);
}

#[tokio::test]
async fn test_delete_user() {
    let api = StoreApi::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3, "firstName": "Sophia", "isDeleted": true, "deletedOn": "2024-05-01T10:00:00.000Z"
        })))
        .mount(&api.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/4"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&api.server)
        .await;

    let users = api.client.users();
    let deleted = delete_with_notice("user", users.delete(3)).await;
    assert_eq!(deleted.notice.message(), "User deleted successfully");
    assert!(deleted.result.unwrap().is_deleted);

    let missing = delete_with_notice("user", users.delete(4)).await;
    assert_eq!(missing.notice.message(), "Failed to delete user");
}
