use super::*;

/// Tests creating a new account.
///
/// Verifies that a created user gets the `user` role and no subscription.
///
/// Expected: Ok with role User and subscription None
#[tokio::test]
async fn creates_regular_user_without_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            avatar: Avatar {
                public_id: "avatars/alice".to_string(),
                url: "https://media.example.com/alice.png".to_string(),
            },
        })
        .await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.role, Role::User);
    assert!(user.subscription.is_none());

    let found = repo.find_by_email("alice@example.com").await?.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.avatar.public_id, "avatars/alice");

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err when inserting a second user with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Bob".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            avatar: Avatar {
                public_id: "avatars/bob".to_string(),
                url: "https://media.example.com/bob.png".to_string(),
            },
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
