//! arraybot - conversational front-end for three array exercises
//!
//! Each user talks to an independent state machine: pick a task, enter or
//! generate data, execute the algorithm and read the result, one message at a
//! time.

mod api;
mod config;
mod error;
mod kernels;
mod messages;
mod runtime;
mod state_machine;
mod tasks;

use api::{create_router, AppState};
use config::Config;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arraybot=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = Config::from_env();
    tracing::info!(
        max_random_size = config.max_random_size,
        "Configuration loaded"
    );

    // Sessions live for the life of the process
    let state = AppState::new(config.session_limits());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("arraybot listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
