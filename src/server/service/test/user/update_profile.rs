use super::*;

/// Tests changing the email to one held by another account.
///
/// Expected: Err(Conflict) and the profile unchanged
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .email("first@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("second@example.com")
        .build()
        .await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let result = UserService::new(db, &media, &feed)
        .update_profile(
            &user,
            UpdateProfileParam {
                name: None,
                email: Some("second@example.com".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(load_user(db, user.id).await?.email, "first@example.com");

    Ok(())
}

/// Tests replacing the avatar.
///
/// Expected: new image uploaded and stored, previous image destroyed
#[tokio::test]
async fn replaces_avatar() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    UserService::new(db, &media, &feed)
        .update_avatar(&user, test_file("new.png"))
        .await?;

    assert_eq!(media.uploads(), vec![("new.png".to_string(), MediaKind::Image)]);
    assert_eq!(
        media.destroyed(),
        vec![(user.avatar.public_id.clone(), MediaKind::Image)]
    );
    assert_eq!(load_user(db, user.id).await?.avatar.public_id, "image/1");

    Ok(())
}
