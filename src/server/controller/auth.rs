use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{AuthResponseDto, ForgetPasswordDto, LoginDto, ResetPasswordDto},
    },
    server::{
        error::AppError,
        middleware::token::{auth_cookie, cleared_cookie},
        service::{
            auth::{AuthService, RegisterParam},
            user::UserService,
        },
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Reads a multipart form with `name`, `email`, `password` and an avatar `file`,
/// creates the user and signs them in.
///
/// # Returns
/// - `201 Created` - Account created, token cookie set
/// - `400 Bad Request` - Missing field or file
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Media host or database error
#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = AUTH_TAG,
    request_body(content = String, content_type = "multipart/form-data", description = "name, email, password and avatar file"),
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Missing field or file", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = MultipartForm::read(multipart).await?;
    let [name, email, password] = form.require(["name", "email", "password"])?;
    let avatar = form.require_file()?;

    let user = AuthService::new(&state.db, &*state.media, &*state.mailer, &state.feed)
        .register(RegisterParam {
            name,
            email,
            password,
            avatar,
        })
        .await?;

    let token = state.tokens.issue(user.id)?;
    let message = format!("{}: Registered Successfully", user.name);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, auth_cookie(token).to_string())],
        Json(AuthResponseDto {
            success: true,
            message,
            user: user.into_dto(Vec::new()),
        }),
    ))
}

/// Sign in with email and password.
///
/// # Returns
/// - `200 OK` - Signed in, token cookie set
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Incorrect credentials
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthResponseDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 401, description = "Incorrect credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest("Please enter all fields".to_string()));
    }

    let user = AuthService::new(&state.db, &*state.media, &*state.mailer, &state.feed)
        .login(payload.email.trim(), &payload.password)
        .await?;

    let playlist = UserService::new(&state.db, &*state.media, &state.feed)
        .get_playlist(user.id)
        .await?;
    let token = state.tokens.issue(user.id)?;
    let message = format!("Welcome Back {}", user.name);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, auth_cookie(token).to_string())],
        Json(AuthResponseDto {
            success: true,
            message,
            user: user.into_dto(playlist),
        }),
    ))
}

/// Sign out by expiring the token cookie.
#[utoipa::path(
    get,
    path = "/api/v1/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto)
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cleared_cookie().to_string())],
        Json(MessageDto::new("Logged Out Successfully")),
    )
}

/// Email a password reset link.
///
/// # Returns
/// - `200 OK` - Reset email sent
/// - `400 Bad Request` - Unknown email
/// - `500 Internal Server Error` - Mail server or database error
#[utoipa::path(
    post,
    path = "/api/v1/forgetpassword",
    tag = AUTH_TAG,
    request_body = ForgetPasswordDto,
    responses(
        (status = 200, description = "Reset email sent", body = MessageDto),
        (status = 400, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forget_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim();

    AuthService::new(&state.db, &*state.media, &*state.mailer, &state.feed)
        .forget_password(email, &state.frontend_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Reset Token has been sent to {}", email))),
    ))
}

/// Set a new password using an emailed reset token.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `401 Unauthorized` - Token invalid or expired
#[utoipa::path(
    put,
    path = "/api/v1/resetpassword/{token}",
    tag = AUTH_TAG,
    params(
        ("token" = String, Path, description = "Reset token from the emailed link")
    ),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 401, description = "Token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &*state.media, &*state.mailer, &state.feed)
        .reset_password(&token, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password Changed Successfully")),
    ))
}
