//! Demo data for local runs and tests.

use blog_core::domain::{Category, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, CategoryRepository, PostRepository};

/// Categories inserted by [`seed_demo_data`], as `(name, slug)`.
pub const DEMO_CATEGORIES: [(&str, &str); 4] = [
    ("CSHARP", "csharp"),
    ("VISUAL STUDIO", "visualstudio"),
    ("ASP.NET CORE", "aspnetcore"),
    ("SQL SERVER", "sqlserver"),
];

/// Insert the demo categories, then two posts filed under categories 2 and 3.
///
/// Categories are matched by slug and posts are only added to an empty post
/// store, so running this twice changes nothing. On an empty store the posts
/// get ids 1 and 2.
pub async fn seed_demo_data(
    posts: &dyn PostRepository,
    categories: &dyn CategoryRepository,
) -> Result<(), RepoError> {
    for (name, slug) in DEMO_CATEGORIES {
        if categories.find_by_slug(slug).await?.is_none() {
            categories.insert(Category::new(name, slug)).await?;
        }
    }

    if !posts.find_all().await?.is_empty() {
        tracing::info!("Posts already present, skipping demo posts");
        return Ok(());
    }

    posts
        .insert(Post::new("Test Title 1", "Test Description 1", 2))
        .await?;
    posts
        .insert(Post::new("Test Title 2", "Test Description 2", 3))
        .await?;

    tracing::info!(
        categories = DEMO_CATEGORIES.len(),
        posts = 2,
        "Seeded demo data"
    );
    Ok(())
}
