//! PostgreSQL connection pool, migrations, health check and search helpers

mod config;
mod connector;
mod health;
mod query;

pub use config::PostgresConfig;
pub use connector::{connect_from_config_with_retry, run_migrations};
pub use health::check_health;
pub use query::contains_pattern;

pub use sea_orm::DatabaseConnection;
