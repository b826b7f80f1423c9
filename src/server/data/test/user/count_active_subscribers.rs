use super::*;

/// Tests counting only active subscriptions.
///
/// Creates one active, one pending and one unsubscribed user.
///
/// Expected: Ok with 3 users and 1 active subscriber
#[tokio::test]
async fn counts_only_active_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .subscription("sub_a", "active")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .subscription("sub_b", "pending")
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.count().await?, 3);
    assert_eq!(repo.count_active_subscribers().await?, 1);

    Ok(())
}
