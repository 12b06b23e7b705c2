//! Trash Cans Domain
//!
//! Trash can list and creation form (name + `#rrggbb` color).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTML list, form, POST with re-rendering on errors
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← TrashCan, TrashCanForm
//! └─────────────┘
//! ```

mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod views;

// Re-export commonly used types
pub use error::{TrashCanError, TrashCanResult};
pub use handlers::ApiDoc;
pub use models::{NewTrashCan, TrashCan, TrashCanForm};
pub use postgres::PgTrashCanRepository;
pub use repository::{InMemoryTrashCanRepository, TrashCanRepository};
pub use service::TrashCanService;
