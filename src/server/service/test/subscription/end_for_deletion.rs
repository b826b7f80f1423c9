use super::*;

/// Tests the deletion cascade for a subscriber inside the refund window.
///
/// Expected: gateway cancel only (no refund), payments removed
#[tokio::test]
async fn cancels_without_refund() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (entity, payment) = factory::helpers::create_subscriber_with_payment(db).await?;
    let user = load_user(db, entity.id).await?;

    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let service = SubscriptionService::new(db, &gateway, &feed, &billing);

    service.end_for_deletion(&user).await?;

    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::Cancel(payment.gateway_subscription_id.clone())]
    );
    assert!(PaymentRepository::new(db)
        .find_by_subscription_id(&payment.gateway_subscription_id)
        .await?
        .is_none());

    Ok(())
}

/// Tests the deletion cascade for a user who never subscribed.
///
/// Expected: Ok(()) and no gateway call
#[tokio::test]
async fn skips_gateway_without_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;
    let user = load_user(db, entity.id).await?;

    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let service = SubscriptionService::new(db, &gateway, &feed, &billing);

    service.end_for_deletion(&user).await?;

    assert!(gateway.calls().is_empty());

    Ok(())
}
