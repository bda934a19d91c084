//! Application configuration loaded from environment variables.

use std::env;

use blog_core::{PostRules, TITLE_MAX_LEN};
use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub rules: PostRules,
    /// Apply pending schema migrations after connecting to the database.
    pub run_migrations: bool,
    /// Insert demo categories and posts at startup.
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(100),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(10),
        });

        let rules = PostRules {
            max_title_len: parse_var("POST_TITLE_MAX_LEN").unwrap_or(TITLE_MAX_LEN),
            require_known_category: flag_var("REQUIRE_KNOWN_CATEGORY"),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
            rules,
            run_migrations: flag_var("RUN_MIGRATIONS"),
            seed_demo_data: flag_var("SEED_DEMO_DATA"),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

/// `true`, `1` and `yes` (any case) switch a flag on; anything else leaves it off.
fn flag_var(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}
