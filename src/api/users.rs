//! User operations.

use std::future::IntoFuture;

use serde::Serialize;

use super::{Deleted, ListRequest};
use crate::listing::{DataSource, SourceFeatures, SourceFuture};
use crate::types::User;
use crate::{Client, Error};

/// Payload for `POST /users/add` and `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Age in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl UserDraft {
    /// Creates a draft with the two names the API requires.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }
}

/// Client for `/users`.
#[derive(Clone)]
pub struct UsersClient {
    client: Client,
}

impl UsersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists users, one page at a time.
    pub fn list(&self) -> ListRequest<User> {
        ListRequest::new(self.client.clone(), "users")
    }

    /// Gets a user by ID.
    pub async fn get(&self, id: u64) -> Result<User, Error> {
        self.client.inner().get(&format!("users/{}", id)).await
    }

    /// Searches users by name, username and email.
    pub fn search(&self, query: &str) -> ListRequest<User> {
        ListRequest::new(self.client.clone(), "users/search").with_param("q", query)
    }

    /// Creates a user.
    pub async fn create(&self, draft: &UserDraft) -> Result<User, Error> {
        self.client.inner().post("users/add", draft).await
    }

    /// Updates a user.
    pub async fn update(&self, id: u64, draft: &UserDraft) -> Result<User, Error> {
        self.client.inner().put(&format!("users/{}", id), draft).await
    }

    /// Deletes a user.
    pub async fn delete(&self, id: u64) -> Result<Deleted<User>, Error> {
        let deleted: Deleted<User> = self.client.inner().delete(&format!("users/{}", id)).await?;
        tracing::info!(id, "user deleted");
        Ok(deleted)
    }
}

impl DataSource for UsersClient {
    type Item = User;

    fn features(&self) -> SourceFeatures {
        SourceFeatures::paged("users").with_search()
    }

    fn fetch_page(&self, offset: u64, limit: u64) -> SourceFuture<'_, User> {
        self.list().limit(limit).skip(offset).into_future()
    }

    fn search(&self, query: &str) -> SourceFuture<'_, User> {
        UsersClient::search(self, query).into_future()
    }
}

impl std::fmt::Debug for UsersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersClient").finish_non_exhaustive()
    }
}
