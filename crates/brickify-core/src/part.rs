//! Part records served by the catalog backend.

use serde::{Deserialize, Serialize};

/// A catalog part.
///
/// Missing fields in backend payloads fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub name: String,
    pub category: String,
    pub color: String,
    pub image_url: String,
    pub quantity: i32,
    pub price: f64,
    pub dimensions: String,
    pub description: String,
}

impl Part {
    /// Creates a part with only an id and a display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
