use std::sync::Arc;

use axum::routing::{any, get};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::middleware::{validated, ValidationState};
use crate::schema::CompiledSchema;

/// HTTP server that validates post bodies before handing them to the
/// placeholder handler.
///
/// The schema is compiled by the caller, so a server cannot exist without one.
pub struct PostServer {
    config: ServerConfig,
    schema: Arc<CompiledSchema>,
}

impl PostServer {
    pub fn new(config: ServerConfig, schema: Arc<CompiledSchema>) -> Self {
        Self { config, schema }
    }

    /// Build the full router: validated `/` plus an unvalidated `/health`.
    pub fn router(&self) -> Router {
        let state = ValidationState::new(Arc::clone(&self.schema), self.config.body_limit);
        let posts = Router::new().route("/", any(handlers::process::handle));

        validated(posts, state)
            .route("/health", get(handlers::health::handle))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        let addr = listener.local_addr()?;
        tracing::info!(
            %addr,
            schema_variant = %self.config.schema_variant,
            body_limit = self.config.body_limit,
            "post-validation-server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
