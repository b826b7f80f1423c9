use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::token::{token_from_headers, TokenService},
    model::user::User,
};

pub enum Permission {
    /// Caller must have the admin role.
    Admin,
    /// Caller must hold an active subscription; admins always pass.
    Subscriber,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AuthError::NotLoggedIn)` - No token cookie
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token user no longer exists
    /// - `Err(AuthError::AccessDenied)` - Admin permission missing
    /// - `Err(AuthError::SubscriptionRequired)` - Subscriber permission missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(token) = token_from_headers(self.headers) else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let user_id = self.tokens.verify(&token)?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("{} is not allowed to access this resource", user.role.as_str()),
                        )
                        .into());
                    }
                }
                Permission::Subscriber => {
                    if !user.has_active_subscription() && !user.is_admin() {
                        return Err(AuthError::SubscriptionRequired(user.id, user.name).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
