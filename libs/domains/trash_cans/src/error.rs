use axum::extract::rejection::FormRejection;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use core_views::ViewError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrashCanError {
    #[error(transparent)]
    InvalidForm(#[from] FormRejection),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Template(#[from] ViewError),
}

pub type TrashCanResult<T> = Result<T, TrashCanError>;

/// Convert TrashCanError to AppError for standardized error pages
impl From<TrashCanError> for AppError {
    fn from(err: TrashCanError) -> Self {
        match err {
            TrashCanError::InvalidForm(rejection) => AppError::FormRejection(rejection),
            TrashCanError::Database(e) => AppError::Database(e),
            TrashCanError::Template(e) => e.into(),
        }
    }
}

impl IntoResponse for TrashCanError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
