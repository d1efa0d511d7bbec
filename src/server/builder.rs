//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::GraphQLExposure;
use super::host::ServerHost;
use crate::config::LibraryConfig;
use crate::core::CatalogStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the library HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(config)
///     .with_store(SqliteCatalogStore::new(pool))
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: Option<LibraryConfig>,
    store: Option<Arc<dyn CatalogStore>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            store: None,
        }
    }

    /// Set the configuration (defaults are used otherwise)
    pub fn with_config(mut self, config: LibraryConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the catalog store (required)
    pub fn with_store(mut self, store: impl CatalogStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared catalog store (required)
    pub fn with_shared_store(mut self, store: Arc<dyn CatalogStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("CatalogStore is required. Call .with_store()"))?;
        let config = self.config.take().unwrap_or_default();

        Ok(ServerHost::new(config, store))
    }

    /// Build the final router exposing the GraphQL API
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        Ok(GraphQLExposure::build_router(host))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to `server.host:server.port` from the configuration
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let host = Arc::new(self.build_host()?);
        let addr = host.config.server.bind_address();
        let app = GraphQLExposure::build_router(host);

        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on http://{}/graphql", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
