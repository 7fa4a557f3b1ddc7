use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/app.db";
const DEFAULT_CORS_ALLOW: &str = "*";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
}

impl Config {
    /// Reads `REB_*` variables, after loading a `.env` file if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("REB_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid REB_LISTEN_ADDR")?;
        let db_path = lookup("REB_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow = lookup("REB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ALLOW.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = match lookup("REB_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid REB_REQUEST_TIMEOUT_MS '{}', using {}ms",
                    raw,
                    DEFAULT_REQUEST_TIMEOUT_MS
                );
                DEFAULT_REQUEST_TIMEOUT_MS
            }),
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        let static_dir = lookup("REB_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into());

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        })
    }
}
