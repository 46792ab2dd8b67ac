//! Configuration from the environment: API key, catalog endpoint, page size.

use std::env;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const PAGE_SIZE_VAR: &str = "GEMINI_PAGE_SIZE";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    pub base_url: String,
    pub page_size: u32,
}

impl Config {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Errors raised before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "GEMINI_API_KEY not found in environment variables. Please set it in your environment or .env file"
    )]
    MissingApiKey,
    #[error("GEMINI_PAGE_SIZE must be a positive integer, got {0:?}")]
    InvalidPageSize(String),
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|name| env::var(name).ok())
}

/// Load configuration through `lookup`. Empty values count as unset.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let api_key = get(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

    let base_url = get(BASE_URL_VAR)
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let page_size = match get(PAGE_SIZE_VAR) {
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(ConfigError::InvalidPageSize(raw)),
        },
        None => DEFAULT_PAGE_SIZE,
    };

    Ok(Config {
        api_key,
        base_url,
        page_size,
    })
}
