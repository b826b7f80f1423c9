use super::*;
use chrono::{Duration, Utc};

/// Tests finding a user by an unexpired reset token digest.
///
/// Expected: Ok(Some) for the matching digest
#[tokio::test]
async fn finds_user_with_valid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "digest".to_string(), now + Duration::minutes(15))
        .await?;

    let found = repo.find_by_reset_token("digest", now).await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an expired token is not accepted.
///
/// Expected: Ok(None) once the expiry has passed
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "digest".to_string(), now - Duration::minutes(1))
        .await?;

    assert!(repo.find_by_reset_token("digest", now).await?.is_none());

    Ok(())
}

/// Tests that resetting the password consumes the token.
///
/// Expected: Ok(None) for the same digest after reset_password
#[tokio::test]
async fn reset_password_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "digest".to_string(), now + Duration::minutes(15))
        .await?;
    repo.reset_password(user.id, "new-hash".to_string()).await?;

    assert!(repo.find_by_reset_token("digest", now).await?.is_none());
    assert_eq!(
        repo.find_by_id(user.id).await?.unwrap().password_hash,
        "new-hash"
    );

    Ok(())
}
