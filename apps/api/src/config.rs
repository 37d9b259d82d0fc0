use anyhow::{Context, Result};

/// Application configuration loaded once at startup from environment
/// variables and injected into handlers via `AppState`. Nothing reads the
/// environment after boot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Optional at startup: the server boots without it and
    /// `POST /api/salary` answers with a configuration error until it is set.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
