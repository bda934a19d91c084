//! Data Transfer Objects - request types for the API.

use blog_core::domain::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of an add or update request.
///
/// `post_id` is ignored on add and identifies the target on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub post_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category_id: Option<i32>,
    pub created_date: Option<DateTime<Utc>>,
}

impl From<PostRequest> for Post {
    fn from(req: PostRequest) -> Self {
        Self {
            id: req.post_id,
            title: req.title,
            description: req.description,
            category_id: req.category_id,
            created_date: req.created_date,
        }
    }
}

/// Query string carrying an optional post id, e.g. `?post_id=2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostIdQuery {
    pub post_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_body_maps_to_unsaved_post() {
        let req: PostRequest = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        let post = Post::from(req);

        assert_eq!(post.id, 0);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.description, "");
        assert_eq!(post.category_id, None);
        assert_eq!(post.created_date, None);
    }

    #[test]
    fn test_full_body_maps_every_field() {
        let req: PostRequest = serde_json::from_str(
            r#"{
                "post_id": 2,
                "title": "Test Title 2 Updated",
                "description": "Test Description 2",
                "category_id": 3,
                "created_date": "2019-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        let post = Post::from(req);

        assert_eq!(post.id, 2);
        assert_eq!(post.category_id, Some(3));
        assert_eq!(
            post.created_date.map(|d| d.to_rfc3339()),
            Some("2019-01-01T00:00:00+00:00".to_string())
        );
    }
}
