use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_user_table::User, m20261001_000002_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistItem::Table)
                    .if_not_exists()
                    .col(pk_auto(PlaylistItem::Id))
                    .col(integer(PlaylistItem::UserId))
                    .col(integer(PlaylistItem::CourseId))
                    .col(string(PlaylistItem::PosterUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_item_user_id")
                            .from(PlaylistItem::Table, PlaylistItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_item_course_id")
                            .from(PlaylistItem::Table, PlaylistItem::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A course appears at most once in a user's playlist
        manager
            .create_index(
                Index::create()
                    .name("idx_playlist_item_unique")
                    .table(PlaylistItem::Table)
                    .col(PlaylistItem::UserId)
                    .col(PlaylistItem::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_playlist_item_unique")
                    .table(PlaylistItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlaylistItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlaylistItem {
    Table,
    Id,
    UserId,
    CourseId,
    PosterUrl,
}
