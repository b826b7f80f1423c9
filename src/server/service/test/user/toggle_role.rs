use super::*;

/// Tests toggling a role twice.
///
/// Expected: user becomes admin, then user again
#[tokio::test]
async fn switches_between_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let service = UserService::new(db, &media, &feed);

    assert_eq!(service.toggle_role(entity.id).await?, Role::Admin);
    assert!(load_user(db, entity.id).await?.is_admin());

    assert_eq!(service.toggle_role(entity.id).await?, Role::User);
    assert!(!load_user(db, entity.id).await?.is_admin());

    Ok(())
}

/// Tests toggling the role of an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_user_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let result = UserService::new(db, &media, &feed).toggle_role(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
