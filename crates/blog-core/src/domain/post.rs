use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Post entity - represents a blog post.
///
/// An `id` of `0` means the post has not been stored yet; storage assigns the
/// real id on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: Option<i32>,
    pub created_date: Option<DateTime<Utc>>,
}

impl Post {
    /// Create an unsaved post stamped with the current time.
    pub fn new(title: impl Into<String>, description: impl Into<String>, category_id: i32) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            category_id: Some(category_id),
            created_date: Some(Utc::now()),
        }
    }

    /// Replace every mutable field with the values carried by `other`.
    ///
    /// The id is left alone, and the created date is taken as given rather than
    /// preserved from the stored record.
    pub fn overwrite_with(&mut self, other: Post) {
        self.title = other.title;
        self.description = other.description;
        self.category_id = other.category_id;
        self.created_date = other.created_date;
    }
}

/// Read projection of a post, as handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    pub post_id: i32,
    pub title: String,
    pub description: String,
    pub category_id: Option<i32>,
    /// Name of the referenced category, if it exists.
    pub category_name: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

impl PostView {
    pub fn new(post: Post, category: Option<&Category>) -> Self {
        Self {
            post_id: post.id,
            title: post.title,
            description: post.description,
            category_id: post.category_id,
            category_name: category.map(|c| c.name.clone()),
            created_date: post.created_date,
        }
    }
}
