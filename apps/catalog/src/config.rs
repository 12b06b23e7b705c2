use core_config::{AppInfo, FromEnv, app_info, env_or_default, env_parse_or_default, server::ServerConfig};
use database::postgres::PostgresConfig;
use pdf_render::PdfOptions;
use std::path::PathBuf;

pub use core_config::Environment;

/// Catalog configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub pdf: PdfOptions,
    /// Served under `/static`
    pub static_dir: PathBuf,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?;
        let pdf = PdfOptions::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            pdf,
            static_dir: PathBuf::from(env_or_default("STATIC_DIR", "public")),
            run_migrations: env_parse_or_default("RUN_MIGRATIONS", "true")?,
        })
    }
}
