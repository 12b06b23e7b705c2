pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error payload rendered on every error page.
///
/// - `code`: integer error code for logging/monitoring (e.g. 1004)
/// - `error`: machine-readable identifier (e.g. "NOT_FOUND")
/// - `message`: human-readable message
/// - `details`: optional structured details (validation field errors)
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Render the error as a standalone HTML page.
    pub fn to_html(&self, status: StatusCode) -> String {
        let details = self
            .details
            .as_ref()
            .map(|d| {
                format!(
                    "<pre class=\"error-details\">{}</pre>",
                    handlebars::html_escape(&serde_json::to_string_pretty(d).unwrap_or_default())
                )
            })
            .unwrap_or_default();

        format!(
            "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{status} - {reason}</title>\n\
             <link rel=\"stylesheet\" href=\"/static/css/app.css\">\n</head>\n<body>\n\
             <main class=\"error\">\n<h1>{status} {reason}</h1>\n\
             <p class=\"error-message\">{message}</p>\n{details}\n\
             <p class=\"error-code\">{error} ({code})</p>\n\
             <p><a href=\"/\">Retour au catalogue</a></p>\n</main>\n</body>\n</html>\n",
            status = status.as_u16(),
            reason = status.canonical_reason().unwrap_or("Error"),
            message = handlebars::html_escape(&self.message),
            error = self.error,
            code = self.code,
        )
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            self.to_html(status),
        )
            .into_response()
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Every variant logs through `tracing` when rendered: client errors at
/// `info`/`warn`, server errors at `error`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Query string error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Form error: {0}")]
    FormRejection(#[from] FormRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Template error: {0}")]
    Template(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(e) => map_db_error(&e),
            AppError::QueryRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query string rejected: {}",
                    e.body_text()
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::InvalidQuery, e.body_text()),
                )
            }
            AppError::FormRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidForm.code(),
                    "Form rejected: {}",
                    e.body_text()
                );
                (
                    e.status(),
                    ErrorResponse::new(ErrorCode::InvalidForm, e.body_text()),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                let mut body = ErrorResponse::new(
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message(),
                );
                body.details = serde_json::to_value(&e).ok();
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::Template(msg) => {
                tracing::error!(
                    error_code = ErrorCode::TemplateError.code(),
                    "Template error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::TemplateError,
                        ErrorCode::TemplateError.default_message(),
                    ),
                )
            }
            AppError::Pdf(msg) => {
                tracing::error!(error_code = ErrorCode::PdfError.code(), "PDF error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::PdfError, ErrorCode::PdfError.default_message()),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(ErrorCode::NotFound, msg),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        ErrorCode::InternalError,
                        ErrorCode::InternalError.default_message(),
                    ),
                )
            }
        };

        body.into_response_with(status)
    }
}

/// Maps a sea-orm `DbErr` to a status code and error page body.
///
/// Internal details never reach the page; they are logged instead.
fn map_db_error(error: &DbErr) -> (StatusCode, ErrorResponse) {
    match error {
        DbErr::RecordNotFound(what) => {
            tracing::info!(
                error_code = ErrorCode::DatabaseNotFound.code(),
                "Database record not found: {}",
                what
            );
            (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    ErrorCode::DatabaseNotFound,
                    ErrorCode::DatabaseNotFound.default_message(),
                ),
            )
        }
        DbErr::ConnectionAcquire(e) => {
            tracing::warn!(
                error_code = ErrorCode::DatabaseConnection.code(),
                "Database connection unavailable: {:?}",
                e
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(
                    ErrorCode::DatabaseConnection,
                    ErrorCode::DatabaseConnection.default_message(),
                ),
            )
        }
        DbErr::Conn(e) => {
            tracing::error!(
                error_code = ErrorCode::DatabaseConnection.code(),
                "Database connection error: {:?}",
                e
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(
                    ErrorCode::DatabaseConnection,
                    ErrorCode::DatabaseConnection.default_message(),
                ),
            )
        }
        DbErr::Exec(_) | DbErr::Query(_) => {
            tracing::error!(
                error_code = ErrorCode::DatabaseError.code(),
                "Database error: {:?}",
                error
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    ErrorCode::DatabaseError,
                    ErrorCode::DatabaseError.default_message(),
                ),
            )
        }
        _ => {
            tracing::error!(
                error_code = ErrorCode::DatabaseUnhandled.code(),
                "Unhandled database error: {:?}",
                error
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    ErrorCode::DatabaseUnhandled,
                    ErrorCode::DatabaseUnhandled.default_message(),
                ),
            )
        }
    }
}
