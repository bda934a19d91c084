//! In-memory repositories - used when no database is configured, and as the
//! storage fake in tests.

mod repository;

pub use repository::{
    InMemoryCategoryRepository, InMemoryPostRepository, InMemoryRepository, Keyed,
};
