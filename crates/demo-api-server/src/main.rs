#![allow(clippy::doc_markdown)]
//! Demo API Server - HTTP API for canary rollout demos.

use axum::{routing::get, Router};
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use demo_api_server::{health_check, hello, info, ApiConfig, ApiDoc, AppState};

/// Demo API Server - build version, host identity and liveness over HTTP
#[derive(Parser, Debug)]
#[command(name = "demo-api-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "demo-api.toml", env = "DEMO_API_CONFIG")]
    config: String,

    /// Host address to bind to (overrides the configuration file)
    #[arg(long, env = "DEMO_API_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long, env = "DEMO_API_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration, CLI flags win over file and environment
    let mut config = ApiConfig::load_from_path(&args.config)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    // Initialize tracing, RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting demo API server...");
    tracing::info!("Application version: {}", config.app.version);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let cors_enabled = config.server.cors_enabled;
    let state = Arc::new(AppState { config });

    // Build API router with state
    let api_router = Router::new()
        .route("/api/hello", get(hello))
        .route("/api/health", get(health_check))
        .route("/api/info", get(info))
        .with_state(state);

    // Swagger UI (stateless router)
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    // Build main app with Swagger UI
    let mut app = api_router.merge(Router::<()>::new().merge(swagger_ui));
    if cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Demo API server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
