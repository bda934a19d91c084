//! Create `post` table.
//!
//! `category_id` has no foreign key; unknown categories are stored as given.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(string_len(Post::Title, 2000).not_null())
                    .col(text(Post::Description).not_null())
                    .col(integer_null(Post::CategoryId))
                    .col(timestamp_with_time_zone_null(Post::CreatedDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Post::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Post {
    Table,
    Id,
    Title,
    Description,
    CategoryId,
    CreatedDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_identifiers() {
        assert_eq!(Migration.name(), "m20240101_000002_create_post");
        assert_eq!(Post::Table.to_string(), "post");
        assert_eq!(Post::CategoryId.to_string(), "category_id");
        assert_eq!(Post::CreatedDate.to_string(), "created_date");
    }
}
