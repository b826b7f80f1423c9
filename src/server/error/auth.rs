use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `token` cookie.
    #[error("Request has no authentication token")]
    NotLoggedIn,

    /// The token failed signature, expiry or claim validation.
    #[error("Failed to validate authentication token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token is valid but its user no longer exists.
    #[error("User ID {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login attempted with an unknown email or a wrong password.
    #[error("Login failed due to incorrect credentials")]
    InvalidCredentials,

    /// Password change attempted with a wrong current password.
    #[error("User ID {0} supplied an incorrect current password")]
    IncorrectPassword(i32),

    /// Password reset token does not match any user or has expired.
    #[error("Password reset token is invalid or has expired")]
    ResetTokenInvalid,

    /// User lacks the role required by the resource.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Message returned to the client
    #[error("User ID {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Resource requires an active subscription the user does not hold.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Display name of the caller
    #[error("User ID {0} requires an active subscription")]
    SubscriptionRequired(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotLoggedIn` / `InvalidToken` / `UserNotInDatabase` → 401 "Not Logged In"
/// - `InvalidCredentials` / `IncorrectPassword` / `ResetTokenInvalid` → 401 with a specific message
/// - `AccessDenied` / `SubscriptionRequired` → 403 Forbidden
///
/// All errors are logged at debug level while client-facing messages stay generic where
/// the detail would leak information.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotLoggedIn | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Not Logged In".to_string())
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Incorrect Credentials".to_string())
            }
            Self::IncorrectPassword(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Incorrect Old Password".to_string())
            }
            Self::ResetTokenInvalid => error_response(
                StatusCode::UNAUTHORIZED,
                "Reset Token is invalid or has been expired".to_string(),
            ),
            Self::AccessDenied(_, message) => error_response(StatusCode::FORBIDDEN, message),
            Self::SubscriptionRequired(_, name) => error_response(
                StatusCode::FORBIDDEN,
                format!("Sorry {}, only subscribers can access this resource", name),
            ),
        }
    }
}
