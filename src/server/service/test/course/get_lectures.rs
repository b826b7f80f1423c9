use super::*;

/// Tests fetching the lectures of a course.
///
/// Expected: the lecture returned, views incremented, course change published
#[tokio::test]
async fn counts_view_and_publishes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, lecture) = factory::helpers::create_course_with_lecture(db).await?;

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let mut changes = feed.subscribe();

    let lectures = CourseService::new(db, &media, &feed)
        .get_lectures(course.id)
        .await?;

    assert_eq!(lectures.len(), 1);
    assert_eq!(lectures[0].id, lecture.id);

    let stored = CourseRepository::new(db).find_by_id(course.id).await?.unwrap();
    assert_eq!(stored.views, course.views + 1);
    assert_eq!(changes.try_recv().unwrap(), CollectionChange::Course);

    Ok(())
}

/// Tests fetching lectures of an unknown course.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_course_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();

    let result = CourseService::new(db, &media, &feed).get_lectures(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
