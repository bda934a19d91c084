use serde::{Deserialize, Serialize};

/// Category entity - the vocabulary posts are filed under.
///
/// Categories are managed outside the post workflow; posts only reference them by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
}

impl Category {
    /// Create a category that has not been stored yet.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            slug: slug.into(),
        }
    }
}
