//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so every handler failure funnels through one translator producing
//! a uniform `{ success: false, message }` body.

pub mod auth;
pub mod config;
pub mod internal;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, upstream::UpstreamError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Payment gateway, media host or mail server failure.
    ///
    /// Results in 500 Internal Server Error; upstream calls are never retried.
    #[error(transparent)]
    UpstreamErr(#[from] UpstreamError),

    /// Unexpected failure inside the codebase (hashing, token encoding).
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Listener bind or serve error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error (missing fields, wrong role for the operation).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing state (duplicate email, playlist entry).
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 500 Internal Server Error - For all other error types (DbErr, UpstreamErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the uniform failure body used by every error response.
pub(crate) fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorDto {
            success: false,
            message,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
