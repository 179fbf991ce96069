// Start of file: src/api/time_message/handler.rs

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::config::state::AppState;
use crate::time::TimeFormatter;

/// Terminal handler for everything the chain forwarded: renders the time
/// message composed by [`TimeFormatter`] over the state's time source.
/// An absent source reads as empty text, matching the timer middleware.
pub async fn time_message_handler(State(state): State<AppState>) -> Response {
    let body: String = match state.time_source.as_deref() {
        Some(source) => TimeFormatter::new(source).get_time(),
        None => "Time: ".to_string(),
    };

    body.into_response()
}

// End of file: src/api/time_message/handler.rs
