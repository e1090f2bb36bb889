//! Additive schema evolution: later revisions introduced a category and an
//! owning user. Both columns are nullable so rows created before this
//! migration stay readable as-is.

use sea_orm_migration::prelude::*;

use crate::m20250410_000001_create_users::Users;
use crate::m20250410_000002_create_posts::Posts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Posts::Table)
                    .add_column(ColumnDef::new(NewColumns::Category).string().null())
                    .add_column(ColumnDef::new(NewColumns::AuthorId).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_posts_author")
                    .from(Posts::Table, NewColumns::AuthorId)
                    .to(Users::Table, Users::Id)
                    .on_update(ForeignKeyAction::Cascade)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_posts_author")
                    .table(Posts::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Posts::Table)
                    .drop_column(NewColumns::Category)
                    .drop_column(NewColumns::AuthorId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum NewColumns {
    Category,
    AuthorId,
}
