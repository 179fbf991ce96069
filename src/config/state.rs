// Application state shared by handlers and middleware

use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::config::environment::EnvironmentVariables;
use crate::time::{SystemTimeSource, TimeSource};

// AppState singleton
#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    /// Time capability resolved per request by whoever needs it. `None`
    /// means no source is registered; readers render empty text instead of
    /// failing.
    pub time_source: Option<Arc<dyn TimeSource>>,
}

impl AppState {
    /// Creates a new AppState instance (private constructor)
    fn new() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::from_env()?;

        Ok(Self {
            environment: Arc::new(environment),
            time_source: Some(Arc::new(SystemTimeSource)),
        })
    }

    /// Returns the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<AppState> = Lazy::new(|| {
            AppState::new().expect("Failed to initialize AppState")
        });
        &INSTANCE
    }
}
