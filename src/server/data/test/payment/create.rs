use super::*;

/// Tests recording a verified payment.
///
/// Expected: Ok with the payment retrievable by subscription id
#[tokio::test]
async fn records_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParam {
            gateway_payment_id: "pay_1".to_string(),
            gateway_subscription_id: "sub_1".to_string(),
            gateway_signature: "sig".to_string(),
        })
        .await?;

    let found = repo.find_by_subscription_id("sub_1").await?.unwrap();
    assert_eq!(found, payment);
    assert_eq!(found.gateway_payment_id, "pay_1");

    Ok(())
}

/// Tests looking up a subscription with no payment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_subscription_has_no_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::payment::create_payment(db, "sub_other").await?;

    assert!(PaymentRepository::new(db)
        .find_by_subscription_id("sub_missing")
        .await?
        .is_none());

    Ok(())
}
