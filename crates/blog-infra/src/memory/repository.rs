use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Category, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, CategoryRepository, PostRepository};

/// Entities that carry a storage-assigned integer id.
pub trait Keyed: Clone + Send + Sync {
    fn key(&self) -> i32;
    fn assign_key(&mut self, id: i32);
}

impl Keyed for Post {
    fn key(&self) -> i32 {
        self.id
    }

    fn assign_key(&mut self, id: i32) {
        self.id = id;
    }
}

impl Keyed for Category {
    fn key(&self) -> i32 {
        self.id
    }

    fn assign_key(&mut self, id: i32) {
        self.id = id;
    }
}

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

/// In-memory repository over a `BTreeMap` with an async `RwLock`.
///
/// Ids are handed out from 1 upwards and never reused, so iteration order is
/// insertion order. Data is lost on process restart.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

/// In-memory category repository.
pub type InMemoryCategoryRepository = InMemoryRepository<Category>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Keyed + 'static> BaseRepository<T, i32> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, mut entity: T) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;
        entity.assign_key(id);
        table.rows.insert(id, entity);

        Ok(1)
    }

    async fn update(&self, entity: T) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let slot = table
            .rows
            .get_mut(&entity.key())
            .ok_or(RepoError::NotFound)?;
        *slot = entity;
        Ok(())
    }

    async fn delete(&self, entity: T) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&entity.key())
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

impl PostRepository for InMemoryPostRepository {}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|c| c.slug == slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();
        let mut post = Post::new("First", "One", 1);
        post.id = 99;

        assert_eq!(repo.insert(post).await.unwrap(), 1);
        assert_eq!(repo.insert(Post::new("Second", "Two", 1)).await.unwrap(), 1);

        let ids: Vec<i32> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("First", "One", 1)).await.unwrap();
        let first = repo.find_by_id(1).await.unwrap().unwrap();
        repo.delete(first).await.unwrap();

        repo.insert(Post::new("Second", "Two", 1)).await.unwrap();
        assert!(repo.find_by_id(1).await.unwrap().is_none());
        assert!(repo.find_by_id(2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_not_found() {
        let repo = InMemoryPostRepository::new();
        let mut ghost = Post::new("Ghost", "Nowhere", 1);
        ghost.id = 7;

        assert!(matches!(
            repo.update(ghost.clone()).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(repo.delete(ghost).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_category_lookup() {
        let repo = InMemoryCategoryRepository::new();
        repo.insert(Category::new("CSHARP", "csharp")).await.unwrap();

        let found = repo.find_by_slug("csharp").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(1));
        assert!(repo.exists(1).await.unwrap());
        assert!(!repo.exists(2).await.unwrap());
    }
}
