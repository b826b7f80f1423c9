use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string(User::Role).default("user"))
                    .col(string(User::AvatarPublicId))
                    .col(string(User::AvatarUrl))
                    .col(string_null(User::SubscriptionId))
                    .col(string_null(User::SubscriptionStatus))
                    .col(string_null(User::ResetPasswordToken))
                    .col(timestamp_with_time_zone_null(User::ResetPasswordExpire))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Stats aggregation counts active subscribers on every user change
        manager
            .create_index(
                Index::create()
                    .name("idx_user_subscription_status")
                    .table(User::Table)
                    .col(User::SubscriptionStatus)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_subscription_status")
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    AvatarPublicId,
    AvatarUrl,
    SubscriptionId,
    SubscriptionStatus,
    ResetPasswordToken,
    ResetPasswordExpire,
    CreatedAt,
}
