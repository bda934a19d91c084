//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{CategoryRepository, PostRepository};
use blog_core::{PostRules, PostService, RepoError};
use blog_infra::seed::seed_demo_data;
use blog_infra::{InMemoryCategoryRepository, InMemoryPostRepository};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub rules: PostRules,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Falls back to in-memory storage only when no database is configured.
    /// A configured database that cannot be reached or migrated is an error.
    pub async fn new(config: &AppConfig) -> Result<Self, RepoError> {
        #[cfg(feature = "postgres")]
        let (posts, categories): (Arc<dyn PostRepository>, Arc<dyn CategoryRepository>) = {
            if let Some(db_config) = &config.database {
                let connections = connect(db_config, config.run_migrations)
                    .await
                    .map_err(|e| RepoError::Connection(e.to_string()))?;
                (
                    Arc::new(PostgresPostRepository::shared(connections.main.clone())),
                    Arc::new(PostgresCategoryRepository::shared(connections.main)),
                )
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory_storage()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (posts, categories) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory_storage()
        };

        let state = Self {
            posts,
            categories,
            rules: config.rules.clone(),
        };

        if config.seed_demo_data {
            seed_demo_data(state.posts.as_ref(), state.categories.as_ref()).await?;
        }

        tracing::info!(
            max_title_len = state.rules.max_title_len,
            require_known_category = state.rules.require_known_category,
            "Application state initialized"
        );

        Ok(state)
    }

    /// State over empty in-memory storage.
    #[cfg(test)]
    pub fn in_memory(rules: PostRules) -> Self {
        let (posts, categories) = in_memory_storage();
        Self {
            posts,
            categories,
            rules,
        }
    }

    /// Post service borrowing this state's storage and rules.
    pub fn post_service(&self) -> PostService<'_> {
        PostService::new(self.posts.as_ref(), self.categories.as_ref(), &self.rules)
    }
}

#[cfg(feature = "postgres")]
async fn connect(
    db_config: &blog_infra::database::DatabaseConfig,
    run_migrations: bool,
) -> Result<DatabaseConnections, migration::DbErr> {
    use migration::{Migrator, MigratorTrait};

    let connections = DatabaseConnections::init(db_config).await?;
    if run_migrations {
        Migrator::up(connections.main.as_ref(), None).await?;
        tracing::info!("Database migrations applied");
    }
    Ok(connections)
}

fn in_memory_storage() -> (Arc<dyn PostRepository>, Arc<dyn CategoryRepository>) {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryCategoryRepository::new()),
    )
}
