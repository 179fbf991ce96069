use axum::{
    body::Body,
    extract::{Request, State},
    http::header::CONTENT_TYPE,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::config::state::AppState;

/// Path answered directly by the timer middleware
pub const TIME_PATH: &str = "/time";

/// Middleware that short-circuits `/time` with the current time and hands
/// every other request to the rest of the chain untouched.
///
/// The path comparison is exact: case-sensitive, no trailing-slash
/// normalization, and the query string plays no part. When the state holds
/// no time source the value renders as empty text rather than failing.
pub async fn timer_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.uri().path() == TIME_PATH {
        debug!("Answering {} directly from the timer middleware", TIME_PATH);

        let value: String = match state.time_source.as_deref() {
            Some(source) => source.get_time(),
            None => String::new(),
        };

        // Status stays at the builder default; only the content type and
        // the body are written here.
        Response::builder()
            .header(CONTENT_TYPE, "text/html; charset=utf-8")
            .body(Body::from(format!("Time: {value}")))
            .unwrap()
    } else {
        next.run(request).await
    }
}
