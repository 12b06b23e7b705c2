use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Failed to register template '{name}': {source}")]
    Register {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

pub type ViewResult<T> = Result<T, ViewError>;

impl From<ViewError> for AppError {
    fn from(err: ViewError) -> Self {
        AppError::Template(err.to_string())
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
