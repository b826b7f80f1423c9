use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        contact::{ContactDto, CourseRequestDto},
    },
    server::{error::AppError, service::contact::ContactService, state::AppState},
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Send a message to the site owner.
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    tag = CONTACT_TAG,
    request_body = ContactDto,
    responses(
        (status = 200, description = "Message sent", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactDto>,
) -> Result<impl IntoResponse, AppError> {
    ContactService::new(&*state.mailer, &state.owner_email)
        .contact(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Your Message Has Been Sent successfully")),
    ))
}

/// Ask the site owner for a new course.
#[utoipa::path(
    post,
    path = "/api/v1/courserequest",
    tag = CONTACT_TAG,
    request_body = CourseRequestDto,
    responses(
        (status = 200, description = "Request sent", body = MessageDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn course_request(
    State(state): State<AppState>,
    Json(payload): Json<CourseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    ContactService::new(&*state.mailer, &state.owner_email)
        .course_request(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Your Request Has Been Sent successfully")),
    ))
}
