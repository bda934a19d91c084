use async_trait::async_trait;

use crate::domain::{Category, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Fetch every stored entity, in whatever order the store yields them.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. The store assigns the ID.
    ///
    /// Returns the number of affected records.
    async fn insert(&self, entity: T) -> Result<u64, RepoError>;

    /// Persist every field of an existing entity, keyed by its ID.
    async fn update(&self, entity: T) -> Result<(), RepoError>;

    /// Remove an existing entity.
    async fn delete(&self, entity: T) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {}

/// Category repository with lookup helpers.
#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, i32> {
    /// Find a category by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError>;

    /// Check whether a category with the given ID exists.
    async fn exists(&self, id: i32) -> Result<bool, RepoError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
