use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Title))
                    .col(text(Course::Description))
                    .col(string(Course::Category))
                    .col(string(Course::CreatedBy))
                    .col(string(Course::PosterPublicId))
                    .col(string(Course::PosterUrl))
                    .col(big_integer(Course::Views).default(0))
                    .col(integer(Course::NumOfVideos).default(0))
                    .col(
                        timestamp_with_time_zone(Course::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Title,
    Description,
    Category,
    CreatedBy,
    PosterPublicId,
    PosterUrl,
    Views,
    NumOfVideos,
    CreatedAt,
}
