mod config;
mod errors;
mod llm_client;
mod routes;
mod salary;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, GenerateText};
use crate::routes::build_router;
use crate::state::AppState;

/// The two frontend origins allowed by CORS. Static; not runtime-configurable.
const ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "https://salarywise.vercel.app",
];

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SalaryWise API v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; /api/salary will return configuration errors");
    }

    // The handler refuses requests before this client is used when no key is
    // configured, so an empty key here is never sent over the wire.
    let api_key = config.gemini_api_key.clone().unwrap_or_default();
    let llm: Arc<dyn GenerateText> = Arc::new(GeminiClient::new(api_key));
    info!("Gemini client initialized");

    let state = AppState {
        config: config.clone(),
        llm,
    };

    let cors = CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(HeaderValue::from_static))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
