use super::*;

/// Tests adding a course to a playlist.
///
/// Expected: Ok with the entry listed and contains() true
#[tokio::test]
async fn adds_course_to_playlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let repo = PlaylistRepository::new(db);
    repo.add(user.id, course.id, course.poster_url.clone())
        .await?;

    assert!(repo.contains(user.id, course.id).await?);
    let playlist = repo.get_by_user(user.id).await?;
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist[0].course_id, course.id);
    assert_eq!(playlist[0].poster_url, course.poster_url);

    Ok(())
}

/// Tests the unique (user, course) constraint.
///
/// Expected: Err when adding the same course twice
#[tokio::test]
async fn rejects_duplicate_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let repo = PlaylistRepository::new(db);
    repo.add(user.id, course.id, course.poster_url.clone())
        .await?;
    let result = repo.add(user.id, course.id, course.poster_url).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that playlists are per user.
///
/// Expected: Ok with the other user's playlist empty
#[tokio::test]
async fn playlists_are_isolated_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let course = factory::course::create_course(db).await?;

    let repo = PlaylistRepository::new(db);
    repo.add(owner.id, course.id, course.poster_url).await?;

    assert!(repo.get_by_user(other.id).await?.is_empty());
    assert!(!repo.contains(other.id, course.id).await?);

    Ok(())
}
