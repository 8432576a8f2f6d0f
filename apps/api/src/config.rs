use std::net::IpAddr;

use anyhow::{Context, Result};

/// Delivery-shell configuration loaded from environment variables.
/// None of these values influence page content.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0")
                .parse::<IpAddr>()
                .context("BIND_ADDR must be a valid IP address")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
