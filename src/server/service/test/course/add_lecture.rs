use super::*;

/// Tests creating a course and adding two lectures.
///
/// Expected: poster uploaded as image, videos as video, video count 2
#[tokio::test]
async fn uploads_media_and_counts_videos() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = MockMediaHost::new();
    let feed = ChangeFeed::new();
    let service = CourseService::new(db, &media, &feed);

    let course = service
        .create(
            CreateCourseParam {
                title: "Rust Basics".to_string(),
                description: "Ownership from the ground up".to_string(),
                category: "Programming".to_string(),
                created_by: "Ada".to_string(),
            },
            test_file("poster.png"),
        )
        .await?;

    for title in ["Intro", "Borrowing"] {
        service
            .add_lecture(
                course.id,
                CreateLectureParam {
                    title: title.to_string(),
                    description: format!("{} lecture", title),
                },
                test_file(&format!("{}.mp4", title)),
            )
            .await?;
    }

    assert_eq!(
        media.uploads(),
        vec![
            ("poster.png".to_string(), MediaKind::Image),
            ("Intro.mp4".to_string(), MediaKind::Video),
            ("Borrowing.mp4".to_string(), MediaKind::Video),
        ]
    );

    let stored = CourseRepository::new(db).find_by_id(course.id).await?.unwrap();
    assert_eq!(stored.num_of_videos, 2);

    Ok(())
}
