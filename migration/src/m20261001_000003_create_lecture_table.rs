use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_course_table::Course;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lecture::Table)
                    .if_not_exists()
                    .col(pk_auto(Lecture::Id))
                    .col(integer(Lecture::CourseId))
                    .col(string(Lecture::Title))
                    .col(text(Lecture::Description))
                    .col(string(Lecture::VideoPublicId))
                    .col(string(Lecture::VideoUrl))
                    .col(
                        timestamp_with_time_zone(Lecture::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_course_id")
                            .from(Lecture::Table, Lecture::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lecture_course_id")
                    .table(Lecture::Table)
                    .col(Lecture::CourseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lecture_course_id")
                    .table(Lecture::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Lecture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lecture {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    VideoPublicId,
    VideoUrl,
    CreatedAt,
}
