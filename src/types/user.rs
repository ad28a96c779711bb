//! User records.

use serde::{Deserialize, Serialize};

use super::Resource;

/// A registered store user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: u64,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Age in years.
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender as reported by the API.
    #[serde(default)]
    pub gender: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Role (`admin`, `moderator`, `user`).
    #[serde(default)]
    pub role: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<UserAddress>,
}

/// A user's postal address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAddress {
    /// Street line.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// State or region.
    #[serde(default)]
    pub state: String,
    /// Postal code.
    #[serde(default)]
    pub postal_code: String,
    /// Country.
    #[serde(default)]
    pub country: String,
}

impl User {
    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const NOUN: &'static str = "user";
}
