use super::*;

/// Tests filtering courses by a case-insensitive title keyword.
///
/// Expected: Ok with only the matching course
#[tokio::test]
async fn filters_by_keyword_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .title("Rust for Beginners")
        .build()
        .await?;
    factory::course::CourseFactory::new(db)
        .title("Advanced Python")
        .build()
        .await?;

    let courses = CourseRepository::new(db)
        .search(CourseFilter {
            keyword: Some("rust".to_string()),
            category: None,
        })
        .await?;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Rust for Beginners");

    Ok(())
}

/// Tests combining keyword and category filters.
///
/// Expected: Ok with only courses matching both filters
#[tokio::test]
async fn combines_keyword_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .title("Web with Rust")
        .category("Web Development")
        .build()
        .await?;
    factory::course::CourseFactory::new(db)
        .title("Embedded Rust")
        .category("Systems")
        .build()
        .await?;

    let courses = CourseRepository::new(db)
        .search(CourseFilter {
            keyword: Some("Rust".to_string()),
            category: Some("web".to_string()),
        })
        .await?;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Web with Rust");

    Ok(())
}

/// Tests listing without filters.
///
/// Expected: Ok with every course
#[tokio::test]
async fn lists_everything_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Course)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::create_course(db).await?;
    factory::course::create_course(db).await?;

    let courses = CourseRepository::new(db)
        .search(CourseFilter::default())
        .await?;

    assert_eq!(courses.len(), 2);

    Ok(())
}
