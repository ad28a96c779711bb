//! Common test harness for shopadmin integration tests.
//!
//! Provides a mock store API whose list endpoints honour `limit`, `skip`,
//! `q` and category paths the way the real service does.

use std::sync::Once;

use serde_json::{Value, json};
use shopadmin::auth::Session;
use shopadmin::Client;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a product record as the API returns it.
pub fn product(id: u64, title: &str, category: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "category": category,
        "price": price,
        "rating": 5.0 - (id % 5) as f64 * 0.5,
        "stock": id * 3,
        "brand": "Acme"
    })
}

/// `n` products alternating between two categories, priced by id.
pub fn catalog(n: u64) -> Vec<Value> {
    (1..=n)
        .map(|id| {
            let category = if id % 2 == 0 { "laptops" } else { "smartphones" };
            product(id, &format!("Item {}", id), category, id as f64 * 10.0)
        })
        .collect()
}

/// Serves a list envelope, applying `q`, a category path segment, `limit`
/// and `skip`.
struct CollectionResponder {
    key: &'static str,
    items: Vec<Value>,
}

impl CollectionResponder {
    fn matches_query(item: &Value, query: &str) -> bool {
        item.as_object().is_some_and(|fields| {
            fields
                .values()
                .filter_map(Value::as_str)
                .any(|value| value.to_lowercase().contains(query))
        })
    }
}

impl Respond for CollectionResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut limit = 30usize;
        let mut skip = 0usize;
        let mut query = None;
        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "limit" => limit = value.parse().unwrap_or(30),
                "skip" => skip = value.parse().unwrap_or(0),
                "q" => query = Some(value.to_lowercase()),
                _ => {},
            }
        }
        let category = request
            .url
            .path()
            .strip_prefix(&format!("/{}/category/", self.key))
            .map(str::to_string);

        let matching: Vec<&Value> = self
            .items
            .iter()
            .filter(|item| query.as_deref().is_none_or(|q| Self::matches_query(item, q)))
            .filter(|item| {
                category
                    .as_deref()
                    .is_none_or(|c| item["category"].as_str() == Some(c))
            })
            .collect();

        let total = matching.len();
        let limit = if limit == 0 { total } else { limit };
        let page: Vec<&Value> = matching.into_iter().skip(skip).take(limit).collect();

        let mut body = json!({ "total": total, "skip": skip, "limit": limit });
        body[self.key] = json!(page);
        ResponseTemplate::new(200).set_body_json(body)
    }
}

/// A mock store API plus an SDK client pointed at it.
pub struct StoreApi {
    pub server: MockServer,
    pub client: Client,
}

impl StoreApi {
    /// Starts an empty server and an anonymous client.
    pub async fn start() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let client = Self::client_for(&server, Session::in_memory());
        Self { server, client }
    }

    /// Builds another client for the same server with its own session.
    pub fn client_with(&self, session: Session) -> Client {
        Self::client_for(&self.server, session)
    }

    fn client_for(server: &MockServer, session: Session) -> Client {
        Client::builder()
            .url(server.uri())
            .session(session)
            .insecure()
            .build()
            .expect("client should build")
    }

    /// Serves `/products`, `/products/search` and `/products/category/{slug}`.
    pub async fn serve_products(&self, items: Vec<Value>) {
        self.serve_collection("products", items, true).await;
    }

    /// Serves `/users` and `/users/search`.
    pub async fn serve_users(&self, items: Vec<Value>) {
        self.serve_collection("users", items, false).await;
    }

    /// Serves `/carts`.
    pub async fn serve_carts(&self, items: Vec<Value>) {
        self.serve_collection("carts", items, false).await;
    }

    async fn serve_collection(&self, key: &'static str, items: Vec<Value>, categories: bool) {
        let mut paths = vec![format!("^/{}$", key), format!("^/{}/search$", key)];
        if categories {
            paths.push(format!("^/{}/category/[^/]+$", key));
        }

        for pattern in paths {
            Mock::given(method("GET"))
                .and(path_regex(pattern))
                .respond_with(CollectionResponder {
                    key,
                    items: items.clone(),
                })
                .mount(&self.server)
                .await;
        }
    }

    /// Answers `POST /auth/login` with `access_token` for user `emilys`.
    pub async fn serve_login(&self, access_token: &str) {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "username": "emilys",
                "email": "emily.johnson@x.dummyjson.com",
                "firstName": "Emily",
                "lastName": "Johnson",
                "accessToken": access_token,
                "refreshToken": "refresh-token"
            })))
            .mount(&self.server)
            .await;
    }
}
