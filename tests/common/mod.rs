//! tests/common/mod.rs
//! Shared test helpers: a double for the time capability and functions to
//! spawn the app (or a custom router) on an ephemeral port.

use std::sync::Arc;

use axum::{serve, Router};
use tokio::net::TcpListener as TokioTcpListener;

use time_service::config::state::AppState;
use time_service::core::server::create_app;
use time_service::time::TimeSource;

/// Time source double that always renders the same value.
pub struct FixedTimeSource(pub &'static str);

impl TimeSource for FixedTimeSource {
    fn get_time(&self) -> String {
        self.0.to_string()
    }
}

/// Clones the singleton state and swaps its time source for `source`.
pub fn state_with_time_source(source: Option<Arc<dyn TimeSource>>) -> AppState {
    let mut state: AppState = AppState::instance().clone();
    state.time_source = source;
    state
}

/// Spawns the full application for `state` and returns its base URL.
pub fn spawn_app(state: AppState) -> String {
    spawn_router(create_app(state))
}

/// Spawns an arbitrary router on a random unused port and returns its base URL.
pub fn spawn_router(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
