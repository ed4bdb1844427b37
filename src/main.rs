// src/main.rs

use std::sync::Arc;

use dotenvy::dotenv;
use edubuilder::config::Config;
use edubuilder::routes;
use edubuilder::services::chat::CannedResponses;
use edubuilder::services::content::HttpContentProvider;
use edubuilder::state::AppState;
use edubuilder::store;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let store = store::open(&config)
        .await
        .expect("Failed to open storage backend");

    let content = HttpContentProvider::from_config(&config)
        .expect("Failed to build content service client");
    tracing::info!(
        "Content service at {} (timeout {}s)",
        config.content_service_url,
        config.content_timeout_secs
    );

    let state = AppState::new(
        config.clone(),
        store,
        Arc::new(content),
        Arc::new(CannedResponses::default()),
    );

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Listening on {}", config.bind_addr);

    // Start the server
    axum::serve(listener, app).await.expect("Server error");
}
