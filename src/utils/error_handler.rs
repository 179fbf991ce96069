// Start of file: /src/utils/error_handler.rs

// * Global error handling logic for layers (e.g. timeouts, large payloads).

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// * tower's error type for timeouts
use tower::timeout::error::Elapsed;
// * Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;

// ? Maps errors surfaced by the layer stack to plain HTTP responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // ! 413 if the body was too large
    if let Some(e) = find_cause::<LengthLimitError>(&*err) {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body too large: {}", e),
        );
    }

    // ! 408 if the request took too long
    if let Some(e) = err.downcast_ref::<Elapsed>() {
        return (
            StatusCode::REQUEST_TIMEOUT,
            format!("Request timeout: {}", e),
        );
    }

    // ! Otherwise, 500
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unhandled internal error: {}", err),
    )
}

// * A small helper function to find a specific cause in a chain of errors
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

// End of file: /src/utils/error_handler.rs
