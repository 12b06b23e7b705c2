use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error codes rendered on error pages and attached to log events.
///
/// Each code has three representations:
/// - a SCREAMING_SNAKE_CASE identifier shown to the visitor
/// - an integer used in structured logs
/// - a default French message for the error page
///
/// Integer ranges:
/// - 1000-1999: client errors
/// - 2000-2999: database errors
/// - 3000-3999: rendering errors (templates, PDF)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    ValidationError,
    InvalidQuery,
    InvalidForm,
    NotFound,
    InternalError,
    MethodNotAllowed,

    // Database errors (2000s)
    DatabaseNotFound,
    DatabaseConnection,
    DatabaseError,
    DatabaseUnhandled,

    // Rendering errors (3000s)
    TemplateError,
    PdfError,
}

impl ErrorCode {
    /// Identifier shown on the error page.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// assert_eq!(ErrorCode::PdfError.as_str(), "PDF_ERROR");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidForm => "INVALID_FORM",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
            Self::TemplateError => "TEMPLATE_ERROR",
            Self::PdfError => "PDF_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            // Client errors (1000-1999)
            Self::ValidationError => 1001,
            Self::InvalidQuery => 1002,
            Self::InvalidForm => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::MethodNotAllowed => 1010,

            // Database errors (2000-2999)
            Self::DatabaseNotFound => 2001,
            Self::DatabaseConnection => 2002,
            Self::DatabaseError => 2003,
            Self::DatabaseUnhandled => 2099,

            // Rendering errors (3000s)
            Self::TemplateError => 3001,
            Self::PdfError => 3002,
        }
    }

    /// Default message shown to the visitor.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Les données envoyées sont invalides",
            Self::InvalidQuery => "Paramètres de recherche invalides",
            Self::InvalidForm => "Formulaire invalide",
            Self::NotFound => "La page demandée est introuvable",
            Self::InternalError => "Une erreur interne est survenue",
            Self::MethodNotAllowed => "Méthode HTTP non autorisée",
            Self::DatabaseNotFound => "Enregistrement introuvable",
            Self::DatabaseConnection => "Base de données indisponible",
            Self::DatabaseError => "Erreur de base de données",
            Self::DatabaseUnhandled => "Erreur de base de données inattendue",
            Self::TemplateError => "Erreur lors du rendu de la page",
            Self::PdfError => "Erreur lors de la génération du PDF",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
