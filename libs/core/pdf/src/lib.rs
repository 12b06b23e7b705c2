//! HTML to PDF rendering for printable summary sheets.
//!
//! ```text
//! HTML ──scraper──► Document (title + blocks) ──layout──► placed lines and images ──printpdf──► PDF bytes
//! ```
//!
//! ```ignore
//! use pdf_render::{PdfOptions, PdfRenderer, PrintPdfRenderer};
//!
//! let engine = PrintPdfRenderer::new(PdfOptions::new("Arial", "public/css/"))?;
//! let bytes = engine.render("<h1>Fiche</h1>")?;
//! ```

mod error;
mod font;
mod html;
mod layout;
mod options;
mod renderer;

pub use error::{PdfError, PdfResult};
pub use options::{Orientation, Paper, PdfOptions};
pub use renderer::{PdfRenderer, PrintPdfRenderer};
