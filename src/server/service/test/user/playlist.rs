use super::*;

/// Tests adding a course twice to the playlist.
///
/// Expected: first add Ok, second Err(Conflict), one entry stored
#[tokio::test]
async fn rejects_duplicate_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;
    let course = factory::create_course(db).await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let service = UserService::new(db, &media, &feed);

    service.add_to_playlist(&user, course.id).await?;
    let result = service.add_to_playlist(&user, course.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let playlist = PlaylistRepository::new(db).get_by_user(user.id).await?;
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist[0].poster_url, course.poster_url);

    Ok(())
}

/// Tests playlist changes for an unknown course.
///
/// Expected: Err(NotFound) for both add and remove
#[tokio::test]
async fn unknown_course_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_user(db).await?;
    let user = load_user(db, entity.id).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let service = UserService::new(db, &media, &feed);

    assert!(matches!(
        service.add_to_playlist(&user, 9999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.remove_from_playlist(&user, 9999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
