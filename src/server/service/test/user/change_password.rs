use super::*;
use crate::server::util::password::verify_password;

/// Tests changing the password with the correct old password.
///
/// Expected: stored hash verifies against the new password
#[tokio::test]
async fn stores_new_hash() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .password_hash(hash_password("old-secret")?)
        .build()
        .await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    UserService::new(db, &media, &feed)
        .change_password(&user, "old-secret", "new-secret")
        .await?;

    let stored = load_user(db, user.id).await?;
    assert!(verify_password("new-secret", &stored.password_hash));
    assert!(!verify_password("old-secret", &stored.password_hash));

    Ok(())
}

/// Tests changing the password with a wrong old password.
///
/// Expected: Err(AuthErr(IncorrectPassword)) and the hash unchanged
#[tokio::test]
async fn rejects_wrong_old_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .password_hash(hash_password("old-secret")?)
        .build()
        .await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let result = UserService::new(db, &media, &feed)
        .change_password(&user, "guess", "new-secret")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::IncorrectPassword(_)))
    ));
    assert_eq!(load_user(db, user.id).await?.password_hash, user.password_hash);

    Ok(())
}
