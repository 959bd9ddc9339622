mod models;
mod handlers;
mod client;
mod error;
mod logger;
mod metrics;

use axum::{routing::{get, post, Router}};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use client::Summarizer;
use metrics::Metrics;

// share the Bedrock client and the counters with all the handlers.
// the client is built once at startup and reused
// to avoid resolving credentials on every request.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Summarizer,
    pub metrics: Arc<Metrics>
}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    let model_id = std::env::var("BEDROCK_MODEL_ID")
        .unwrap_or_else(|_| "us.amazon.nova-lite-v1:0".to_string());

    // region and credentials are resolved by the AWS SDK
    let summarizer = Summarizer::new(model_id).await;

    // create app state
    let state = AppState {
        summarizer,
        metrics: Arc::new(Metrics::new())
    };

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/v1/summarize", post(handlers::summarize_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state); // share the app state

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port 3000");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}
