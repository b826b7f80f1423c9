use super::*;

/// Tests summing views across courses.
///
/// Expected: Ok with the sum including an incremented counter
#[tokio::test]
async fn sums_views_of_all_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::course::CourseFactory::new(db)
        .views(10)
        .build()
        .await?;
    factory::course::CourseFactory::new(db)
        .views(5)
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    repo.increment_views(course.id).await?;

    assert_eq!(repo.find_by_id(course.id).await?.unwrap().views, 11);
    assert_eq!(repo.total_views().await?, 16);

    Ok(())
}

/// Tests the total with no courses.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_catalog_has_zero_views() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(CourseRepository::new(db).total_views().await?, 0);

    Ok(())
}
