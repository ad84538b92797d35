use std::sync::Arc;

use post_validation_server::config::ServerConfig;
use post_validation_server::schema::CompiledSchema;
use post_validation_server::server::PostServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Refuse to serve anything unvalidated.
    let schema = match CompiledSchema::load(config.schema_variant.definition()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!(schema_variant = %config.schema_variant, "failed to load schema: {e}");
            std::process::exit(1);
        }
    };

    let server = PostServer::new(config, schema);
    if let Err(e) = server.run().await {
        tracing::error!("fatal error: {e}");
        std::process::exit(1);
    }
}
