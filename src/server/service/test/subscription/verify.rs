use super::*;
use crate::server::util::signature::sign_payment;

/// Tests verification with a signature computed over the stored subscription id.
///
/// Expected: Verified, one payment stored, subscription status active
#[tokio::test]
async fn activates_on_valid_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .subscription("sub_1", "created")
        .build()
        .await?;
    let user = load_user(db, entity.id).await?;

    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let service = SubscriptionService::new(db, &gateway, &feed, &billing);

    let signature = sign_payment(TEST_SECRET, "pay_1", "sub_1")?;
    let outcome = service
        .verify(
            &user,
            PaymentVerificationParam {
                payment_id: "pay_1".to_string(),
                subscription_id: "sub_1".to_string(),
                signature,
            },
        )
        .await?;

    assert_eq!(
        outcome,
        VerificationOutcome::Verified {
            payment_id: "pay_1".to_string()
        }
    );

    let payment = PaymentRepository::new(db)
        .find_by_subscription_id("sub_1")
        .await?
        .unwrap();
    assert_eq!(payment.gateway_payment_id, "pay_1");

    let stored = load_user(db, user.id).await?.subscription.unwrap();
    assert_eq!(stored.status, SubscriptionStatus::Active);

    Ok(())
}

/// Tests verification with a signature that does not match.
///
/// Expected: Rejected, no payment stored, subscription still pending
#[tokio::test]
async fn rejects_tampered_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .subscription("sub_1", "created")
        .build()
        .await?;
    let user = load_user(db, entity.id).await?;

    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let service = SubscriptionService::new(db, &gateway, &feed, &billing);

    let signature = sign_payment(TEST_SECRET, "pay_other", "sub_1")?;
    let outcome = service
        .verify(
            &user,
            PaymentVerificationParam {
                payment_id: "pay_1".to_string(),
                subscription_id: "sub_1".to_string(),
                signature,
            },
        )
        .await?;

    assert_eq!(outcome, VerificationOutcome::Rejected);
    assert!(PaymentRepository::new(db)
        .find_by_subscription_id("sub_1")
        .await?
        .is_none());
    assert_eq!(
        load_user(db, user.id).await?.subscription.unwrap().status,
        SubscriptionStatus::Pending
    );

    Ok(())
}

/// Tests that the client-supplied subscription id is not trusted.
///
/// Signs over a different subscription id and echoes that id back.
///
/// Expected: Rejected because the stored id is used for the check
#[tokio::test]
async fn ignores_client_subscription_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .subscription("sub_1", "created")
        .build()
        .await?;
    let user = load_user(db, entity.id).await?;

    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let service = SubscriptionService::new(db, &gateway, &feed, &billing);

    let signature = sign_payment(TEST_SECRET, "pay_1", "sub_other")?;
    let outcome = service
        .verify(
            &user,
            PaymentVerificationParam {
                payment_id: "pay_1".to_string(),
                subscription_id: "sub_other".to_string(),
                signature,
            },
        )
        .await?;

    assert_eq!(outcome, VerificationOutcome::Rejected);

    Ok(())
}

/// Tests verification for a user who never created a subscription.
///
/// Expected: Rejected and nothing written
#[tokio::test]
async fn rejects_user_without_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;
    let user = load_user(db, entity.id).await?;

    let gateway = MockGateway::new();
    let feed = ChangeFeed::new();
    let billing = billing();
    let service = SubscriptionService::new(db, &gateway, &feed, &billing);

    let outcome = service
        .verify(
            &user,
            PaymentVerificationParam {
                payment_id: "pay_1".to_string(),
                subscription_id: "sub_1".to_string(),
                signature: "00".to_string(),
            },
        )
        .await?;

    assert_eq!(outcome, VerificationOutcome::Rejected);
    assert!(load_user(db, user.id).await?.subscription.is_none());

    Ok(())
}
