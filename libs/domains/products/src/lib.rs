//! Products Domain
//!
//! Read-only product catalog: listing with search and pagination, detail
//! page, security form and printable PDF summary sheet.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTML pages, `{slug}-{id}` canonical URLs
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌─────────────┐
//! │   Service   │ ──► │ Views / PDF │  ← Handlebars templates, PDF engine
//! └──────┬──────┘     └─────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, Pictogram, search filter, page
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use core_views::ViewEngine;
//! use domain_products::{handlers, views, PgProductRepository, ProductService};
//! use pdf_render::{PdfOptions, PrintPdfRenderer};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://localhost/catalog").await?;
//!
//! let mut engine = ViewEngine::new()?;
//! views::register_templates(&mut engine)?;
//!
//! let service = ProductService::new(PgProductRepository::new(db));
//! let renderer = PrintPdfRenderer::new(PdfOptions::new("Arial", "public/css/"))?;
//! let router = handlers::router(service, Arc::new(engine), Arc::new(renderer));
//! # Ok(())
//! # }
//! ```

mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pdf;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod slug;
pub mod views;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    ListQuery, Pictogram, PictogramKind, Product, ProductPage, ProductSearch, PAGE_SIZE,
};
pub use pdf::PdfDownload;
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::{ProductService, Resolved};
pub use slug::ProductSegment;
