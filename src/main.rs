//! Library catalog GraphQL server
//!
//! Configuration is read from the YAML file named by `LIBRARY_CONFIG` (when
//! set), with `LIBRARY_DATABASE_URL` and `LIBRARY_PORT` overrides.

use anyhow::Result;
use library::config::LibraryConfig;
use library::server::ServerBuilder;
use library::storage::sqlite::{self, SqliteCatalogStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = LibraryConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let pool = sqlite::connect(&config.database).await?;
    sqlite::ensure_schema(&pool).await?;

    ServerBuilder::new()
        .with_config(config)
        .with_store(SqliteCatalogStore::new(pool))
        .serve()
        .await
}
