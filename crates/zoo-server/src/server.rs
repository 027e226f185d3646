use std::sync::Arc;

use tokio::net::TcpListener;
use zoo_store::{Catalog, JsonFileStorage};

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;

/// Zoo catalog server.
pub struct ZooServer {
    config: ServerConfig,
    catalog: Arc<Catalog>,
}

impl ZooServer {
    /// Load the catalog from `config.data_path`.
    pub fn open(config: ServerConfig) -> ServerResult<Self> {
        let catalog = Catalog::open(JsonFileStorage::new(&config.data_path))?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Serve an already opened catalog.
    pub fn with_catalog(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.catalog), &self.config.public_dir)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            animals = self.catalog.len(),
            "zoo server listening"
        );
        axum::serve(listener, app).await?;
        Ok(())
    }
}
