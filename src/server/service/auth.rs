//! Registration, login and password reset.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    events::feed::{ChangeFeed, CollectionChange},
    mailer::{Email, Mailer},
    media::{MediaFile, MediaHost, MediaKind},
    model::user::{Avatar, CreateUserParam, User},
    util::{
        frontend,
        password::{hash_password, verify_password},
        reset_token::{self, ResetToken},
    },
};

/// Fields of a registration form, already checked for presence.
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: MediaFile,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    media: &'a dyn MediaHost,
    mailer: &'a dyn Mailer,
    feed: &'a ChangeFeed,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        media: &'a dyn MediaHost,
        mailer: &'a dyn Mailer,
        feed: &'a ChangeFeed,
    ) -> Self {
        Self {
            db,
            media,
            mailer,
            feed,
        }
    }

    /// Creates an account and uploads its avatar.
    ///
    /// The email is checked before anything is uploaded.
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::UpstreamErr)` - Avatar upload failed
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = hash_password(&param.password)?;
        let uploaded = self.media.upload(param.avatar, MediaKind::Image).await?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                avatar: Avatar {
                    public_id: uploaded.public_id,
                    url: uploaded.secure_url,
                },
            })
            .await?;
        self.feed.publish(CollectionChange::User);

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Stores a reset token digest and mails the raw token as a frontend link.
    ///
    /// # Returns
    /// - `Ok(())` - Email sent
    /// - `Err(AppError::BadRequest)` - No account with that email
    /// - `Err(AppError::UpstreamErr)` - Mail server rejected the message
    pub async fn forget_password(&self, email: &str, frontend_url: &Url) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::BadRequest("User not found".to_string()));
        };

        let token = ResetToken::generate(Utc::now());
        user_repo
            .set_reset_token(user.id, token.digest.clone(), token.expires_at)
            .await?;

        let link = reset_link(frontend_url, &token.token)?;

        self.mailer
            .send(Email {
                to: user.email,
                subject: "Reset Password".to_string(),
                body: format!(
                    "Click on the link to reset your password. {}. If you have not requested then please ignore.",
                    link
                ),
            })
            .await?;

        Ok(())
    }

    /// Sets a new password for the owner of an unexpired reset token.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), AppError> {
        if password.is_empty() {
            return Err(AppError::BadRequest("Please enter a password".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo
            .find_by_reset_token(&reset_token::digest(token), Utc::now())
            .await?
        else {
            return Err(AuthError::ResetTokenInvalid.into());
        };

        let password_hash = hash_password(password)?;
        user_repo.reset_password(user.id, password_hash).await?;

        Ok(())
    }
}

fn reset_link(frontend_url: &Url, token: &str) -> Result<Url, InternalError> {
    frontend::page(frontend_url, &format!("resetpassword/{}", token))
}
