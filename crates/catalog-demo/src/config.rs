//! Environment configuration: one base URL per mirrored collection plus the
//! shared request timeout. Each value falls back to the local development
//! default with a log line, so a bare `cargo run` talks to a local
//! json-server-style backend on port 5575.

use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub struct Config {
    pub products_url: String,
    pub reviews_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self {
            products_url: try_load("CATALOG_PRODUCTS_URL", "http://localhost:5575/products"),
            reviews_url: try_load("CATALOG_REVIEWS_URL", "http://localhost:5575/reviews"),
            request_timeout: Duration::from_millis(try_load("CATALOG_TIMEOUT_MS", "10000")),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
