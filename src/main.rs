use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod llm;

use api::AppState;
use config::Config;
use llm::LlmClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // -----------------------------
    // Shared state / Dependencies
    // -----------------------------
    let config = Config::from_env();
    let llm = Arc::new(LlmClient::new(&config.backend)?);

    let state = AppState { llm };

    // -----------------------------
    // Routers
    // -----------------------------
    let app = Router::new()
        .merge(api::api_router())
        // CORS for frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;

    println!("🌐 HTTP listening on http://{}", config.bind_addr);
    println!("🤖 Forwarding chat requests to {}", config.backend.root_url);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
