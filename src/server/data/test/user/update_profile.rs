use super::*;
use crate::server::model::user::UpdateProfileParam;

/// Tests updating only the name.
///
/// Expected: Ok with name changed and email untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Old Name")
        .email("keep@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_profile(
        user.id,
        UpdateProfileParam {
            name: Some("New Name".to_string()),
            email: None,
        },
    )
    .await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.email, "keep@example.com");

    Ok(())
}

/// Tests that an empty update is a no-op.
///
/// Expected: Ok with the user unchanged
#[tokio::test]
async fn empty_update_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).name("Same").build().await?;

    let repo = UserRepository::new(db);
    repo.update_profile(user.id, UpdateProfileParam::default())
        .await?;

    assert_eq!(repo.find_by_id(user.id).await?.unwrap().name, "Same");

    Ok(())
}
