use super::*;
use sea_orm::EntityTrait;

/// Tests storing a pending subscription.
///
/// Expected: Ok with subscription id and pending status stored together
#[tokio::test]
async fn stores_subscription_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_subscription(
        user.id,
        &Subscription {
            id: "sub_123".to_string(),
            status: SubscriptionStatus::Pending,
        },
    )
    .await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(
        stored.subscription,
        Some(Subscription {
            id: "sub_123".to_string(),
            status: SubscriptionStatus::Pending,
        })
    );
    assert!(!stored.has_active_subscription());

    Ok(())
}

/// Tests activating a pending subscription.
///
/// Expected: Ok with status active and the id unchanged
#[tokio::test]
async fn activates_existing_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .subscription("sub_456", "pending")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.activate_subscription(user.id).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.has_active_subscription());
    assert_eq!(stored.subscription.unwrap().id, "sub_456");

    Ok(())
}

/// Tests that activation does nothing for a user without a subscription.
///
/// Expected: Ok with both subscription columns still empty
#[tokio::test]
async fn activation_without_subscription_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    UserRepository::new(db)
        .activate_subscription(user.id)
        .await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.subscription_id.is_none());
    assert!(stored.subscription_status.is_none());

    Ok(())
}

/// Tests clearing the subscription sub-record.
///
/// Expected: Ok with id and status both cleared
#[tokio::test]
async fn clears_id_and_status_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .subscription("sub_789", "active")
        .build()
        .await?;

    UserRepository::new(db).clear_subscription(user.id).await?;

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.subscription_id.is_none());
    assert!(stored.subscription_status.is_none());

    Ok(())
}
