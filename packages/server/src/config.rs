use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
///
/// Relay credentials are optional: the server starts without them and the
/// affected endpoint answers with a configuration error per request.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub port: u16,
    pub emailoctopus_api_key: Option<String>,
    pub emailoctopus_list_id: Option<String>,
    pub web3forms_access_key: Option<String>,
    /// Origins allowed by the read API CORS layer; empty means any
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            emailoctopus_api_key: non_empty_var("EMAILOCTOPUS_API_KEY"),
            emailoctopus_list_id: non_empty_var("EMAILOCTOPUS_LIST_ID"),
            web3forms_access_key: non_empty_var("WEB3FORMS_ACCESS_KEY"),
            allowed_origins: non_empty_var("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn has_mailing_list(&self) -> bool {
        self.emailoctopus_api_key.is_some() && self.emailoctopus_list_id.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
