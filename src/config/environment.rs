// Start of file: /src/config/environment.rs

/*
    * Defines the application's environment variables and provides a method
    * for loading them from the system (or .env) using dotenv.
*/

use std::borrow::Cow;
use anyhow::Result;
use dotenv::dotenv;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds

#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
}

/*
    * Load all environment variables or fall back to defaults where specified.
*/
impl EnvironmentVariables {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            environment: match dotenv::var("ENVIRONMENT") {
                Ok(env) => env.into(),
                Err(_) => {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    DEFAULT_ENVIRONMENT.into()
                }
            },
            host: match dotenv::var("HOST") {
                Ok(host) => host.into(),
                Err(_) => DEFAULT_HOST.into(),
            },
            port: match dotenv::var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => DEFAULT_PORT,
            },
            max_request_body_size: match dotenv::var("MAX_REQUEST_BODY_SIZE") {
                Ok(size) => size.parse()?,
                Err(_) => DEFAULT_MAX_BODY_SIZE,
            },
            default_timeout_seconds: match dotenv::var("DEFAULT_TIMEOUT_SECONDS") {
                Ok(seconds) => seconds.parse()?,
                Err(_) => DEFAULT_TIMEOUT,
            },
        })
    }
}

// End of file: /src/config/environment.rs
