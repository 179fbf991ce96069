// Start of file: /src/api/hello/handler.rs

/*
    * This file contains the handler logic for the "hello" endpoint.
    * It responds with a small JSON document through a typed struct.
*/

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;

use crate::config::state::AppState;

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: String,
    // The UTC date/time (RFC3339) when the server responded.
    pub date: String,
}

#[tracing::instrument(skip(_state))]
pub async fn hello_handler(State(_state): State<AppState>) -> (StatusCode, Json<HelloResponse>) {
    let body: HelloResponse = HelloResponse {
        message: "Hello World!".to_string(),
        date: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(body))
}

// End of file: /src/api/hello/handler.rs
