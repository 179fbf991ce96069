// Library root for the Axum time service

pub mod api;
pub mod config;
pub mod core;
pub mod time;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::time::{SystemTimeSource, TimeFormatter, TimeSource};
