// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use time_service::config::state::AppState;
use time_service::core::logging::init_tracing;
use time_service::core::server::{create_app, setup_listener, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let state: AppState = AppState::instance().clone();

    // build our router with the timer middleware and the global layers
    let app: Router = create_app(state);

    // Listenfd integration happens inside setup_listener
    let listener: TcpListener = setup_listener().await?;

    println!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
