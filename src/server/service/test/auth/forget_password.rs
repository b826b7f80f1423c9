use super::*;

/// Tests the full reset flow from the emailed link.
///
/// Expected: email holds a link under the frontend url; the token resets the
/// password once and is rejected afterwards
#[tokio::test]
async fn mailed_token_resets_password_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .build()
        .await?;

    let media = MockMediaHost::new();
    let mailer = MockMailer::new();
    let feed = ChangeFeed::new();
    let service = AuthService::new(db, &media, &mailer, &feed);
    let frontend = Url::parse("https://courses.example.com").unwrap();

    service.forget_password("ada@example.com", &frontend).await?;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ada@example.com");
    assert_eq!(sent[0].subject, "Reset Password");

    let prefix = "https://courses.example.com/resetpassword/";
    let start = sent[0].body.find(prefix).unwrap() + prefix.len();
    let token: String = sent[0].body[start..]
        .chars()
        .take_while(|c| c.is_ascii_hexdigit())
        .collect();
    assert_eq!(token.len(), 40);

    service.reset_password(&token, "brand-new").await?;

    let stored = load_user(db, entity.id).await?;
    assert!(verify_password("brand-new", &stored.password_hash));

    assert!(matches!(
        service.reset_password(&token, "again").await,
        Err(AppError::AuthErr(AuthError::ResetTokenInvalid))
    ));

    Ok(())
}

/// Tests requesting a reset for an unknown email.
///
/// Expected: Err(BadRequest) and no email sent
#[tokio::test]
async fn unknown_email_is_bad_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let media = MockMediaHost::new();
    let mailer = MockMailer::new();
    let feed = ChangeFeed::new();
    let frontend = Url::parse("https://courses.example.com").unwrap();

    let result = AuthService::new(db, &media, &mailer, &feed)
        .forget_password("nobody@example.com", &frontend)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(mailer.sent().is_empty());

    Ok(())
}
