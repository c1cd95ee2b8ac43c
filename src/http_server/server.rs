//! # HTTP Server
//!
//! Combines the elements sub-endpoint with health and metrics routes.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::documents::DocumentRegistry;
use crate::observability::{Logger, MetricsRegistry};
use crate::rest_api::{ElementsEndpoint, RestServer};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};

/// HTTP server for the document elements API
pub struct HttpServer {
    config: HttpServerConfig,
    metrics: Arc<MetricsRegistry>,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(registry: Arc<dyn DocumentRegistry>) -> Self {
        Self::with_config(HttpServerConfig::default(), registry)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, registry: Arc<dyn DocumentRegistry>) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let router = Self::build_router(&config, registry, metrics.clone());
        Self {
            config,
            metrics,
            router,
        }
    }

    /// Build the combined router
    fn build_router(
        config: &HttpServerConfig,
        registry: Arc<dyn DocumentRegistry>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let elements = ElementsEndpoint::new(registry, metrics.clone());

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest(&config.documents_path, RestServer::new(elements).router())
            .nest("/observability", observability_routes(metrics))
            .layer(cors)
    }

    pub fn config(&self) -> &HttpServerConfig {
        &self.config
    }

    /// Shared request counters
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        self.metrics.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process stops
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self
            .config
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;

        let addr_str = addr.to_string();
        Logger::info(
            "SERVER_STARTING",
            &[
                ("addr", addr_str.as_str()),
                ("documents_path", self.config.documents_path.as_str()),
            ],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
