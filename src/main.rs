use nurse_assistant::server::config::{configure_app, AppConfig};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = AppConfig::default();

    // Create and configure the app. This also creates the transcript
    // directory so the first exchange has somewhere to land.
    let app = configure_app(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("✨ Server ready:");
    info!("  🌎 http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
