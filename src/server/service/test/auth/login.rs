use super::*;

/// Tests login with a registered email and wrong password.
///
/// Expected: Err(AuthErr(InvalidCredentials)) for both the wrong password and
/// an unknown email
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = MockMediaHost::new();
    let mailer = MockMailer::new();
    let feed = ChangeFeed::new();
    let service = AuthService::new(db, &media, &mailer, &feed);

    service.register(register_param("ada@example.com")).await?;

    assert!(matches!(
        service.login("ada@example.com", "wrong").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "secret-pass").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let user = service.login("ada@example.com", "secret-pass").await?;
    assert_eq!(user.email, "ada@example.com");

    Ok(())
}
