use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(string(Payment::GatewayPaymentId))
                    .col(string(Payment::GatewaySubscriptionId))
                    .col(string(Payment::GatewaySignature))
                    .col(
                        timestamp_with_time_zone(Payment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: one payment per subscription is only upheld by application flow
        manager
            .create_index(
                Index::create()
                    .name("idx_payment_gateway_subscription_id")
                    .table(Payment::Table)
                    .col(Payment::GatewaySubscriptionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_payment_gateway_subscription_id")
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    GatewayPaymentId,
    GatewaySubscriptionId,
    GatewaySignature,
    CreatedAt,
}
