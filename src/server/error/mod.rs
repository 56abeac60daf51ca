//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. Every variant
//! belongs to one [`FailureKind`] so callers and tests can tell a missing row from a
//! constraint violation, while the HTTP boundary still collapses all non-validation
//! failures into the same negative response.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, SuccessDto},
    server::error::config::ConfigError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database error that is not a constraint violation: connection, pool
    /// acquisition, malformed statement, rollback failure.
    ///
    /// Constraint violations are classified as [`AppError::Conflict`] when converting
    /// from `DbErr`, see the `From<DbErr>` implementation below.
    #[error(transparent)]
    DbErr(DbErr),

    /// Socket or listener error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Missing or malformed request field, caught before any database call.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Update or delete matched no rows.
    #[error("{0}")]
    NotFound(String),

    /// Unique or foreign-key constraint violation.
    #[error("{0}")]
    Conflict(String),
}

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Conflict,
    Infrastructure,
}

impl AppError {
    /// Returns the failure kind this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::BadRequest(_) => FailureKind::Validation,
            Self::NotFound(_) => FailureKind::NotFound,
            Self::Conflict(_) => FailureKind::Conflict,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) => FailureKind::Infrastructure,
        }
    }

    /// Wraps the error so it renders as a plain-text 500, the format used by read endpoints.
    ///
    /// # Arguments
    /// - `message` - Text returned to the client; the error itself is only logged
    pub fn into_plain_text(self, message: &'static str) -> PlainTextError {
        PlainTextError {
            source: self,
            message,
        }
    }
}

/// Classifies database errors.
///
/// Unique and foreign-key violations become [`AppError::Conflict`]; everything else is
/// kept as an infrastructure failure.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => AppError::Conflict(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => AppError::Conflict(detail),
            _ => AppError::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request with `{ "message": ... }` - For `BadRequest`
/// - 500 Internal Server Error with `{ "success": false }` - For every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                tracing::debug!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into the uniform negative response.
///
/// Logs the error and answers 500 with `{ "success": false }` so clients cannot tell
/// a missing row from a database outage.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(SuccessDto::failed())).into_response()
    }
}

/// Plain-text 500 used by the read endpoints.
#[derive(Debug)]
pub struct PlainTextError {
    source: AppError,
    message: &'static str,
}

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        tracing::error!("{}: {}", self.message, self.source);

        (StatusCode::INTERNAL_SERVER_ERROR, self.message).into_response()
    }
}
