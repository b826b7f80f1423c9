use axum::{
    extract::{Multipart, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{ChangePasswordDto, PlaylistRequestDto, UpdateProfileDto, UserResponseDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, token::cleared_cookie},
        model::user::UpdateProfileParam,
        service::{subscription::SubscriptionService, user::UserService},
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
pub struct PlaylistQuery {
    /// Course id to remove
    pub id: i32,
}

/// Get the signed-in user's profile with playlist.
///
/// # Returns
/// - `200 OK` - Profile
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/v1/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the signed-in user", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let playlist = UserService::new(&state.db, &*state.media, &state.feed)
        .get_playlist(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(playlist),
        }),
    ))
}

/// Delete the signed-in user's account.
///
/// Destroys the avatar, ends any subscription at the gateway without a refund
/// and clears the token cookie.
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Gateway, media host or database error
#[utoipa::path(
    delete,
    path = "/api/v1/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let subscriptions =
        SubscriptionService::new(&state.db, &*state.gateway, &state.feed, &state.billing);
    UserService::new(&state.db, &*state.media, &state.feed)
        .delete(&user, &subscriptions)
        .await?;

    let message = format!(
        "{} Your Profile Has Been Deleted Successfully and if you had our subscription then Your Subscription has been ended",
        user.name
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cleared_cookie().to_string())],
        Json(MessageDto::new(message)),
    ))
}

/// Change the signed-in user's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Missing field
/// - `401 Unauthorized` - Not logged in or incorrect old password
#[utoipa::path(
    put,
    path = "/api/v1/changepassword",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not logged in or incorrect old password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db, &*state.media, &state.feed)
        .change_password(&user, &payload.old_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "{}, Your Password Changed Successfully",
            user.name
        ))),
    ))
}

/// Update the signed-in user's name and/or email.
#[utoipa::path(
    put,
    path = "/api/v1/updateprofile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = UpdateProfileParam {
        name: non_blank(payload.name),
        email: non_blank(payload.email),
    };

    UserService::new(&state.db, &*state.media, &state.feed)
        .update_profile(&user, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "{}, Your Profile Updated Successfully",
            user.name
        ))),
    ))
}

/// Replace the signed-in user's avatar with the uploaded `file`.
#[utoipa::path(
    put,
    path = "/api/v1/updateprofilepicture",
    tag = USER_TAG,
    request_body(content = String, content_type = "multipart/form-data", description = "New avatar file"),
    responses(
        (status = 200, description = "Avatar replaced", body = MessageDto),
        (status = 400, description = "No file uploaded", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile_picture(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let file = MultipartForm::read(multipart).await?.require_file()?;

    UserService::new(&state.db, &*state.media, &state.feed)
        .update_avatar(&user, file)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "{}, Your Profile Picture Updated Successfully",
            user.name
        ))),
    ))
}

/// Add a course to the signed-in user's playlist.
///
/// # Returns
/// - `200 OK` - Added
/// - `404 Not Found` - Unknown course
/// - `409 Conflict` - Already on the playlist
#[utoipa::path(
    post,
    path = "/api/v1/addtoplaylist",
    tag = USER_TAG,
    request_body = PlaylistRequestDto,
    responses(
        (status = 200, description = "Added to playlist", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Unknown course", body = ErrorDto),
        (status = 409, description = "Already on the playlist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_playlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PlaylistRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db, &*state.media, &state.feed)
        .add_to_playlist(&user, payload.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Added to Playlist"))))
}

/// Remove a course from the signed-in user's playlist.
#[utoipa::path(
    delete,
    path = "/api/v1/removefromplaylist",
    tag = USER_TAG,
    params(PlaylistQuery),
    responses(
        (status = 200, description = "Removed from playlist", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Unknown course", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_playlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PlaylistQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db, &*state.media, &state.feed)
        .remove_from_playlist(&user, query.id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Removed from Playlist"))))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
