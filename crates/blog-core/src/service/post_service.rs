use std::collections::HashMap;

use crate::domain::{Post, PostView};
use crate::error::{RepoError, ValidationError};
use crate::ports::{BaseRepository, CategoryRepository, PostRepository};

use super::{Outcome, PostRules};

/// Post use cases.
///
/// Every operation validates first and looks records up second, so a request
/// that is both malformed and aimed at a missing record reports `BadRequest`.
/// Storage errors are passed through untouched.
pub struct PostService<'a> {
    posts: &'a dyn PostRepository,
    categories: &'a dyn CategoryRepository,
    rules: &'a PostRules,
}

impl<'a> PostService<'a> {
    pub fn new(
        posts: &'a dyn PostRepository,
        categories: &'a dyn CategoryRepository,
        rules: &'a PostRules,
    ) -> Self {
        Self {
            posts,
            categories,
            rules,
        }
    }

    /// Fetch a single post as a view.
    pub async fn get_by_id(&self, id: Option<i32>) -> Result<Outcome<PostView>, RepoError> {
        let Some(id) = id else {
            tracing::debug!("Rejected post lookup without an id");
            return Ok(Outcome::BadRequest(ValidationError::MissingId));
        };

        let Some(post) = self.posts.find_by_id(id).await? else {
            tracing::debug!(post_id = id, "Post not found");
            return Ok(Outcome::NotFound);
        };

        let category = match post.category_id {
            Some(category_id) => self.categories.find_by_id(category_id).await?,
            None => None,
        };

        Ok(Outcome::Success(PostView::new(post, category.as_ref())))
    }

    /// Fetch every post as a view, in storage order.
    pub async fn get_all(&self) -> Result<Outcome<Vec<PostView>>, RepoError> {
        let posts = self.posts.find_all().await?;
        let categories: HashMap<_, _> = self
            .categories
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let views: Vec<PostView> = posts
            .into_iter()
            .map(|post| {
                let category = post.category_id.and_then(|id| categories.get(&id));
                PostView::new(post, category)
            })
            .collect();

        tracing::debug!(count = views.len(), "Listed posts");
        Ok(Outcome::Success(views))
    }

    /// Store a new post. The payload is the number of records written.
    pub async fn add(&self, post: Post) -> Result<Outcome<u64>, RepoError> {
        if let Some(reason) = self.rejection(&post).await? {
            tracing::debug!(%reason, "Rejected new post");
            return Ok(Outcome::BadRequest(reason));
        }

        let written = self.posts.insert(post).await?;
        tracing::debug!(written, "Post added");
        Ok(Outcome::Success(written))
    }

    /// Replace title, description, category and created date of an existing post.
    pub async fn update(&self, post: Post) -> Result<Outcome<()>, RepoError> {
        if let Some(reason) = self.rejection(&post).await? {
            tracing::debug!(post_id = post.id, %reason, "Rejected post update");
            return Ok(Outcome::BadRequest(reason));
        }

        let Some(mut existing) = self.posts.find_by_id(post.id).await? else {
            tracing::debug!(post_id = post.id, "Post to update not found");
            return Ok(Outcome::NotFound);
        };

        existing.overwrite_with(post);
        self.posts.update(existing).await?;
        Ok(Outcome::Done)
    }

    /// Remove a post.
    pub async fn delete(&self, id: Option<i32>) -> Result<Outcome<()>, RepoError> {
        let Some(id) = id else {
            tracing::debug!("Rejected post deletion without an id");
            return Ok(Outcome::BadRequest(ValidationError::MissingId));
        };

        let Some(post) = self.posts.find_by_id(id).await? else {
            tracing::debug!(post_id = id, "Post to delete not found");
            return Ok(Outcome::NotFound);
        };

        self.posts.delete(post).await?;
        tracing::debug!(post_id = id, "Post deleted");
        Ok(Outcome::Done)
    }

    /// Static checks first, then the optional category lookup.
    async fn rejection(&self, post: &Post) -> Result<Option<ValidationError>, RepoError> {
        if let Err(reason) = self.rules.check_title(&post.title) {
            return Ok(Some(reason));
        }

        if self.rules.require_known_category {
            if let Some(category_id) = post.category_id {
                if !self.categories.exists(category_id).await? {
                    return Ok(Some(ValidationError::UnknownCategory(category_id)));
                }
            }
        }

        Ok(None)
    }
}
