//! Login, session persistence and gate integration tests.

use std::sync::Arc;

use serde_json::json;
use shopadmin::auth::{AuthGate, FileTokenStore, GateDecision, LoginCredentials, Session, SessionTokens, TokenStore};
use shopadmin::ErrorKind;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{StoreApi, product};

fn emily() -> LoginCredentials {
    LoginCredentials::new("emilys", "emilyspass")
}

/// Logging in installs the token every later request carries.
#[tokio::test]
async fn test_login_then_bearer_requests() {
    let api = StoreApi::start().await;
    api.serve_login("access-1").await;
    Mock::given(method("GET"))
        .and(path("/products/7"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product(7, "Lamp", "lighting", 12.0)))
        .expect(1)
        .mount(&api.server)
        .await;

    let gate = AuthGate::default();
    assert_eq!(gate.evaluate(api.client.session().state()), GateDecision::Redirect {
        to: "/".into()
    });

    let user = api.client.auth().login(&emily()).await.expect("login should succeed");
    assert_eq!(user.username, "emilys");
    assert_eq!(gate.evaluate(api.client.session().state()), GateDecision::Allow);

    let lamp = api.client.products().get(7).await.expect("authorized get");
    assert_eq!(lamp.title, "Lamp");
}

/// A failed login leaves the session anonymous.
#[tokio::test]
async fn test_failed_login_stays_logged_out() {
    let api = StoreApi::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&api.server)
        .await;

    let err = api.client.auth().login(&emily()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "Invalid credentials");
    assert!(!api.client.session().is_authenticated());
}

/// Tokens written at login are picked up by a fresh session and restored.
#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let token_file = dir.path().join("session.json");
    let api = StoreApi::start().await;
    api.serve_login("access-2").await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "username": "emilys", "firstName": "Emily", "lastName": "Johnson"
        })))
        .mount(&api.server)
        .await;

    {
        let session = Session::load(Arc::new(FileTokenStore::new(&token_file))).unwrap();
        let client = api.client_with(session);
        client.auth().login(&emily()).await.unwrap();
    }

    let session = Session::load(Arc::new(FileTokenStore::new(&token_file))).unwrap();
    let gate = AuthGate::new("/login");
    assert!(session.is_authenticated());
    assert_eq!(gate.evaluate(session.state()), GateDecision::Loading);

    let client = api.client_with(session.clone());
    let user = client.auth().restore().await.unwrap().expect("stored token is valid");
    assert_eq!(user.full_name(), "Emily Johnson");
    assert_eq!(gate.evaluate(session.state()), GateDecision::Allow);
}

/// A stored token the server rejects is discarded and the gate redirects.
#[tokio::test]
async fn test_rejected_token_is_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileTokenStore::new(dir.path().join("session.json")));
    store.save(&SessionTokens::new("expired", None)).unwrap();

    let api = StoreApi::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token Expired!"})))
        .mount(&api.server)
        .await;

    let session = Session::load(store.clone()).unwrap();
    let client = api.client_with(session.clone());
    assert!(client.auth().restore().await.unwrap().is_none());

    assert_eq!(AuthGate::new("/login").evaluate(session.state()), GateDecision::Redirect {
        to: "/login".into()
    });
    assert!(store.load().unwrap().is_none());
}

/// Logging out drops the token from later requests.
#[tokio::test]
async fn test_logout() {
    let api = StoreApi::start().await;
    api.serve_login("access-3").await;

    api.client.auth().login(&emily()).await.unwrap();
    assert!(api.client.session().access_token().is_some());

    api.client.auth().logout().unwrap();
    assert!(api.client.session().access_token().is_none());
    assert!(api.client.session().user().is_none());
    assert!(!AuthGate::default().evaluate(api.client.session().state()).is_allowed());
}
