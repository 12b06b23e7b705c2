use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Invalid PDF option '{key}': {details}")]
    InvalidOption { key: &'static str, details: String },

    #[error("Font error: {0}")]
    Font(String),

    #[error("PDF engine error: {0}")]
    Engine(String),
}

pub type PdfResult<T> = Result<T, PdfError>;
