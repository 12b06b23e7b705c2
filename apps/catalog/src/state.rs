//! Application state shared by the route builders.

use core_views::ViewEngine;
use pdf_render::{PdfRenderer, PrintPdfRenderer};
use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// Built once at startup; cloning only copies `Arc` pointers and the
/// connection pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Templates of every domain, registered on one engine
    pub views: Arc<ViewEngine>,
    pub pdf: Arc<dyn PdfRenderer>,
}

impl AppState {
    pub fn new(config: Config, db: database::postgres::DatabaseConnection) -> eyre::Result<Self> {
        let views = build_view_engine()?;
        let pdf = PrintPdfRenderer::new(config.pdf.clone())?;

        Ok(Self {
            config,
            db,
            views: Arc::new(views),
            pdf: Arc::new(pdf),
        })
    }
}

/// Engine with the layout, form partial and all page templates.
pub fn build_view_engine() -> eyre::Result<ViewEngine> {
    let mut engine = ViewEngine::new()?;
    domain_products::views::register_templates(&mut engine)?;
    domain_users::views::register_templates(&mut engine)?;
    domain_trash_cans::views::register_templates(&mut engine)?;
    Ok(engine)
}
