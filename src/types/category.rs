//! Product categories.

use serde::{Deserialize, Deserializer, Serialize};

/// A product category.
///
/// Newer API versions return `{"slug", "name", "url"}` objects while older
/// ones return bare slugs; both decode to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// URL-safe key used by `/products/category/{slug}`.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
}

impl Category {
    /// Creates a category from its slug and display name.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Object { slug: String, name: Option<String> },
            Bare(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Object { slug, name } => {
                let name = name.unwrap_or_else(|| slug.clone());
                Category { slug, name }
            },
            Wire::Bare(slug) => Category {
                name: slug.clone(),
                slug,
            },
        })
    }
}
