//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds everything a request needs: the configuration and the
//! catalog service wrapping the shared store handle. It is threaded through
//! schema construction explicitly; there is no global store.

use crate::config::LibraryConfig;
use crate::core::{CatalogService, CatalogStore};
use std::sync::Arc;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(config, Arc::new(InMemoryCatalogStore::new())));
/// let app = GraphQLExposure::build_router(host);
/// ```
pub struct ServerHost {
    /// Effective configuration
    pub config: Arc<LibraryConfig>,

    /// Catalog operations over the shared store
    pub catalog: CatalogService,
}

impl ServerHost {
    pub fn new(config: LibraryConfig, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            config: Arc::new(config),
            catalog: CatalogService::new(store),
        }
    }

    /// The shared store handle
    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        self.catalog.store()
    }
}
