//! Users Domain
//!
//! Read-only user directory with a search form: username, given name and
//! family name filters plus a four-way sort order (`trie`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /users, form binding and re-rendering
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Search
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, UserSearchForm, SortOrder
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use core_views::ViewEngine;
//! use domain_users::{handlers, views, InMemoryUserRepository, UserService};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = ViewEngine::new()?;
//! views::register_templates(&mut engine)?;
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let router = handlers::router(service, Arc::new(engine));
//! # Ok(())
//! # }
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
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{SortOrder, User, UserSearch, UserSearchForm};
pub use postgres::PostgresUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
