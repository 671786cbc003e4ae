use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};
use crate::recommendations::links::DEFAULT_PROBE_TIMEOUT;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,
    /// Profile persistence is optional; recommendations work without it.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub link_probe_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_url: optional_env("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            link_probe_timeout: match optional_env("LINK_PROBE_TIMEOUT_SECS") {
                Some(secs) => Duration::from_secs(
                    secs.parse::<u64>()
                        .context("LINK_PROBE_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                None => DEFAULT_PROBE_TIMEOUT,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
