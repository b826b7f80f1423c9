use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stats::Table)
                    .if_not_exists()
                    .col(pk_auto(Stats::Id))
                    .col(big_integer(Stats::Users).default(0))
                    .col(big_integer(Stats::Subscriptions).default(0))
                    .col(big_integer(Stats::Views).default(0))
                    .col(
                        timestamp_with_time_zone(Stats::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stats {
    Table,
    Id,
    Users,
    Subscriptions,
    Views,
    CreatedAt,
}
