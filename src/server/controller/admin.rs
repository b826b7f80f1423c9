use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        stats::DashboardStatsDto,
        user::UsersDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{stats::StatsService, subscription::SubscriptionService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List every user.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - All users with their playlists
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users", body = UsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db, &*state.media, &state.feed);

    let mut users = Vec::new();
    for user in service.get_all().await? {
        let playlist = service.get_playlist(user.id).await?;
        users.push(user.into_dto(playlist));
    }

    Ok((StatusCode::OK, Json(UsersDto { success: true, users })))
}

/// Toggle a user's role between `user` and `admin`.
///
/// # Access Control
/// - `Admin` - Only admins can change roles
///
/// # Returns
/// - `200 OK` - Role changed
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    put,
    path = "/api/v1/admin/user/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Role changed", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = UserService::new(&state.db, &*state.media, &state.feed)
        .toggle_role(user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Role Updated : This person is now an {}",
            role.as_str()
        ))),
    ))
}

/// Delete a user with the same cascade as self-deletion.
///
/// # Access Control
/// - `Admin` - Only admins can delete other users
///
/// # Returns
/// - `200 OK` - User deleted
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    delete,
    path = "/api/v1/admin/user/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let subscriptions =
        SubscriptionService::new(&state.db, &*state.gateway, &state.feed, &state.billing);
    let user = UserService::new(&state.db, &*state.media, &state.feed)
        .delete_by_id(user_id, &subscriptions)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "{} has been Deleted Successfully",
            user.name
        ))),
    ))
}

/// Dashboard of the last twelve stats periods with month-over-month changes.
///
/// # Access Control
/// - `Admin` - Only admins can view platform statistics
///
/// # Returns
/// - `200 OK` - Twelve points oldest first, zero-padded, plus the latest counts,
///   percentage changes and profit flags
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let report = StatsService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
