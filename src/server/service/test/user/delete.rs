use super::*;

/// Tests deleting a subscriber's own account.
///
/// Expected: avatar destroyed, gateway cancel without refund, payments and
/// user removed, user change published
#[tokio::test]
async fn cascades_to_media_and_gateway() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (entity, payment) = factory::helpers::create_subscriber_with_payment(db).await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let mut changes = feed.subscribe();
    let billing = billing();
    let subscriptions = SubscriptionService::new(db, &gateway, &feed, &billing);

    UserService::new(db, &media, &feed)
        .delete(&user, &subscriptions)
        .await?;

    assert_eq!(
        media.destroyed(),
        vec![(user.avatar.public_id.clone(), MediaKind::Image)]
    );
    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::Cancel(payment.gateway_subscription_id.clone())]
    );
    assert!(PaymentRepository::new(db)
        .find_by_subscription_id(&payment.gateway_subscription_id)
        .await?
        .is_none());
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());
    assert_eq!(changes.try_recv().unwrap(), CollectionChange::User);

    Ok(())
}

/// Tests deleting a user who never subscribed.
///
/// Expected: no gateway call, user removed
#[tokio::test]
async fn skips_gateway_without_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let subscriptions = SubscriptionService::new(db, &gateway, &feed, &billing);

    UserService::new(db, &media, &feed)
        .delete(&user, &subscriptions)
        .await?;

    assert!(gateway.calls().is_empty());
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests admin deletion of an unknown user id.
///
/// Expected: Err(NotFound) with nothing destroyed
#[tokio::test]
async fn delete_by_id_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = MockMediaHost::new();
    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let subscriptions = SubscriptionService::new(db, &gateway, &feed, &billing);

    let result = UserService::new(db, &media, &feed)
        .delete_by_id(9999, &subscriptions)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(media.destroyed().is_empty());

    Ok(())
}
