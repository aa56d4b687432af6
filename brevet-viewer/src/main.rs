use std::net::SocketAddr;

use brevet_viewer::api::{ApiClient, ApiConfig};
use brevet_viewer::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Remote API base address from the environment
    let base_url = std::env::var("BREVET_API_URL").unwrap_or_else(|_| {
        eprintln!("Warning: BREVET_API_URL not set. Using http://laptop:5000.");
        "http://laptop:5000".to_string()
    });

    let config = ApiConfig::new(&base_url);
    let client = ApiClient::new(config).expect("Failed to create API client");

    // Build app state
    let state = AppState::new(client);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Brevet Times Viewer listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!("Queries are sent to the brevet times API at {base_url}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
