use super::*;

/// Tests deleting every payment of a subscription.
///
/// Creates two payments for one subscription and one for another.
///
/// Expected: Ok(2) and the other subscription's payment untouched
#[tokio::test]
async fn deletes_all_payments_of_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::payment::create_payment(db, "sub_1").await?;
    factory::payment::create_payment(db, "sub_1").await?;
    factory::payment::create_payment(db, "sub_2").await?;

    let repo = PaymentRepository::new(db);
    assert_eq!(repo.delete_by_subscription_id("sub_1").await?, 2);
    assert!(repo.find_by_subscription_id("sub_1").await?.is_none());
    assert!(repo.find_by_subscription_id("sub_2").await?.is_some());

    Ok(())
}
