//! Printable summary sheet of a product.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use core_views::ViewEngine;
use pdf_render::PdfRenderer;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::views::{ProductView, SUMMARY_SHEET};

/// A rendered PDF shown inline by the browser.
#[derive(Debug, Clone)]
pub struct PdfDownload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfDownload {
    pub fn content_disposition(&self) -> String {
        content_disposition(&self.filename)
    }
}

impl IntoResponse for PdfDownload {
    fn into_response(self) -> Response {
        let disposition = HeaderValue::from_str(&self.content_disposition())
            .unwrap_or_else(|_| HeaderValue::from_static("inline"));

        (
            [
                (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// `<French name>_fiche_resume.pdf`
pub fn summary_sheet_filename(product: &Product) -> String {
    format!("{}_fiche_resume.pdf", product.french_name)
}

/// Inline disposition with an ASCII fallback and the UTF-8 name (RFC 6266).
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() => c,
            '.' | '-' | '_' | ' ' | '(' | ')' => c,
            _ => '_',
        })
        .collect();

    format!(
        "inline; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

/// Render the summary sheet template and convert it to PDF.
///
/// The conversion runs on the blocking pool.
#[instrument(skip_all, fields(product_id = product.id))]
pub async fn export_summary_sheet(
    views: &ViewEngine,
    renderer: Arc<dyn PdfRenderer>,
    product: &Product,
) -> ProductResult<PdfDownload> {
    let html = views.render(SUMMARY_SHEET, &ProductView::summary_sheet(product))?;

    let bytes = tokio::task::spawn_blocking(move || renderer.render(&html))
        .await
        .map_err(|e| ProductError::Internal(format!("PDF task failed: {}", e)))??;

    tracing::info!(size = bytes.len(), "Rendered summary sheet");
    Ok(PdfDownload {
        filename: summary_sheet_filename(product),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_is_inline_with_utf8_name() {
        let value = content_disposition("Acétone_fiche_resume.pdf");
        assert_eq!(
            value,
            "inline; filename=\"Ac_tone_fiche_resume.pdf\"; filename*=UTF-8''Ac%C3%A9tone_fiche_resume.pdf"
        );
    }

    #[test]
    fn test_fallback_strips_quotes() {
        let value = content_disposition("Peroxyde d'hydrogène \"pur\".pdf");
        assert!(value.starts_with("inline; filename=\"Peroxyde d_hydrog_ne _pur_.pdf\""));
        assert!(HeaderValue::from_str(&value).is_ok());
    }
}
