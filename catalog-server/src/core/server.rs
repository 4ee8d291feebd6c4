//! Server Implementation
//!
//! Router assembly and the HTTP listener.

use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::core::{Config, ServerState};
use crate::middleware::{PanicHandler, logging_middleware};

/// Build the application with every route and middleware attached
///
/// Layers run outermost first: panic catch-all, CORS, request logging.
pub fn build_app(state: ServerState) -> Router {
    let panic_handler = PanicHandler::new(state.config.is_production());

    Router::new()
        .merge(api::health::router())
        .merge(api::products::router())
        .merge(api::categories::router())
        .fallback(api::fallback)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(panic_handler))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let state = ServerState::new(config.clone());
        Self { config, state }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "Catalog server listening on {} ({})",
            addr,
            self.config.environment
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, build_app(self.state))
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
