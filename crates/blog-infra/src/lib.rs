//! # Blog Infrastructure
//!
//! Concrete implementations of the storage ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod memory;
pub mod seed;

// Re-exports - In-Memory
pub use memory::{InMemoryCategoryRepository, InMemoryPostRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};
