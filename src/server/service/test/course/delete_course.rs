use super::*;

/// Tests deleting a course that has a lecture and a playlist entry.
///
/// Expected: poster and video destroyed, course, lectures and playlist entry removed
#[tokio::test]
async fn removes_course_and_media() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, lecture) = factory::helpers::create_course_with_lecture(db).await?;
    let user = factory::create_user(db).await?;
    PlaylistRepository::new(db)
        .add(user.id, course.id, course.poster_url.clone())
        .await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let service = CourseService::new(db, &media, &feed);

    service.delete_course(course.id).await?;

    assert_eq!(
        media.destroyed(),
        vec![
            (course.poster_public_id.clone(), MediaKind::Image),
            (lecture.video_public_id.clone(), MediaKind::Video),
        ]
    );
    assert!(CourseRepository::new(db).find_by_id(course.id).await?.is_none());
    assert_eq!(LectureRepository::new(db).count_by_course(course.id).await?, 0);
    assert!(PlaylistRepository::new(db).get_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a lecture that belongs to another course.
///
/// Expected: Err(NotFound) and the lecture kept
#[tokio::test]
async fn delete_lecture_checks_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_course, lecture) = factory::helpers::create_course_with_lecture(db).await?;
    let other = factory::create_course(db).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();

    let result = CourseService::new(db, &media, &feed)
        .delete_lecture(other.id, lecture.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(media.destroyed().is_empty());
    assert!(LectureRepository::new(db)
        .find(lecture.course_id, lecture.id)
        .await?
        .is_some());

    Ok(())
}
