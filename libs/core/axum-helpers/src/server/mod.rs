//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI documentation and common layers
//! - Health and readiness helpers
//! - Graceful shutdown coordination
//! - Database connection cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_router, create_production_app, health_router};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(routes).merge(health_router(app_info!()));
//! create_production_app(app, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use cleanup::close_postgres;
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
