//! Runtime Configuration
//!
//! Settings resolved once at startup from the environment, with logged
//! defaults so a bare `cargo run` serves the bundled dataset.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    /// TCP port the HTTP server binds on.
    pub port: u16,
    /// Path of the JSON catalog document read at startup.
    pub data_path: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("MENU_PORT", "3000"),
            data_path: try_load("MENU_DATA_PATH", "data/menu.json"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {} not set, using default", key);
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {} value: {}", key, e);
        })
        .expect("Environment misconfigured!")
}
