use axum::extract::rejection::QueryRejection;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use core_views::ViewError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Template(#[from] ViewError),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error pages
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidQuery(rejection) => AppError::QueryRejection(rejection),
            UserError::Database(e) => AppError::Database(e),
            UserError::Template(e) => e.into(),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
