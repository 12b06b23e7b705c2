use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use core_views::ViewError;
use pdf_render::PdfError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error(transparent)]
    Template(#[from] ViewError),

    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] PdfError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error pages
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Produit {} introuvable", id)),
            ProductError::Database(e) => AppError::Database(e),
            ProductError::Template(e) => e.into(),
            ProductError::Pdf(e) => AppError::Pdf(e.to_string()),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ProductError::NotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_pdf_and_database_errors_map_to_500() {
        let pdf = ProductError::Pdf(PdfError::Engine("no fonts".to_string())).into_response();
        let db = ProductError::from(DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(pdf.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unreachable_database_maps_to_503() {
        let err = DbErr::Conn(sea_orm::RuntimeErr::Internal("connection refused".to_string()));
        let response = ProductError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
