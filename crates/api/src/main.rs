//! FrankX AI gateway HTTP API.

mod error;
mod handlers;
mod state;
mod types;

use std::env;
use std::net::SocketAddr;

use axum::routing::{get, post, put};
use axum::Router;
use tracing::info;

use crate::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let addr = env::var("FRANKX_API_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let state = match AppState::from_env().await {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Failed to initialize: {}", err);
            std::process::exit(1);
        }
    };

    let app = router(state);

    let addr: SocketAddr = addr.parse().expect("Invalid FRANKX_API_ADDR");
    info!(%addr, "FrankX API listening");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Build the application router.
fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/models", get(handlers::list_models))
        .route(
            "/personas",
            get(handlers::list_personas).post(handlers::create_persona),
        )
        .route(
            "/personas/:id",
            put(handlers::update_persona).delete(handlers::delete_persona),
        )
        .route("/agents", get(handlers::list_agents))
        .route("/agents/conversation", post(handlers::create_conversation))
        .route("/agents/message", post(handlers::send_message))
        .route(
            "/agents/clear-conversation",
            post(handlers::clear_conversation),
        )
        .route("/recommendations/agents", get(handlers::recommend_agents))
        .route(
            "/recommendations/resources",
            get(handlers::recommend_resources),
        )
        .route("/ai/conversation", post(handlers::ai_conversation))
        .with_state(state)
}
