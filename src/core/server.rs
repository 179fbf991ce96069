// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn_with_state,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;

use crate::api::hello::routes::hello_routes;
use crate::api::middleware::timer::timer_middleware;
use crate::api::time_message::handler::time_message_handler;
use crate::config::state::AppState;
use crate::utils::error_handler::handle_global_error;

/// Creates and configures the application router with all middleware layers.
/// The timer middleware sits above the router, so `/time` is answered before
/// any route or the fallback is consulted.
pub fn create_app(state: AppState) -> Router {
    let max_body_size: usize = state.environment.max_request_body_size;
    let timeout_seconds: u64 = state.environment.default_timeout_seconds;

    Router::new()
        .merge(hello_routes())
        // Requests the middleware forwards and no route claims end up here
        .fallback(time_message_handler)
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(max_body_size))
                .layer(from_fn_with_state(state.clone(), timer_middleware))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(timeout_seconds))),
        )
        .with_state(state)
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener() -> Result<TcpListener> {
    let env: &std::sync::Arc<crate::config::environment::EnvironmentVariables> =
        &AppState::instance().environment;
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate: std::future::Pending<()> = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
