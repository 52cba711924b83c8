// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::time::Duration;

/// Public open-data catalog hosting the "open-gym" dataset.
pub const DEFAULT_BASE_URL: &str = "https://data.townofcary.org/api/explore/v2.1";
/// Records requested per fetch. Only the first page is ever read.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Largest page the catalog API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Open-data API root (without the dataset path)
    pub base_url: String,
    /// `limit` query parameter for the records request
    pub page_size: u32,
    /// Request timeout for the open-data call
    pub request_timeout: Duration,
    /// Fraction of the screen width a card must travel to count as a swipe
    pub swipe_threshold_fraction: f32,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Load the first page of gyms before serving requests
    pub fetch_on_startup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(10),
            swipe_threshold_fraction: 0.25,
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            fetch_on_startup: true,
        }
    }
}

impl Config {
    /// Config for tests: points at a local server and never fetches on its own.
    pub fn test_default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(2),
            fetch_on_startup: false,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let page_size = parse_var("OPEN_GYM_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::Invalid(
                "OPEN_GYM_PAGE_SIZE",
                format!("must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }

        let swipe_threshold_fraction =
            parse_var("SWIPE_THRESHOLD_FRACTION", defaults.swipe_threshold_fraction)?;
        if !swipe_threshold_fraction.is_finite() || swipe_threshold_fraction <= 0.0 {
            return Err(ConfigError::Invalid(
                "SWIPE_THRESHOLD_FRACTION",
                "must be a positive number".to_string(),
            ));
        }

        let timeout_secs = parse_var("OPEN_GYM_TIMEOUT_SECS", defaults.request_timeout.as_secs())?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "OPEN_GYM_TIMEOUT_SECS",
                "must be at least 1".to_string(),
            ));
        }

        let port = parse_var("PORT", defaults.port)?;
        if port == 0 {
            return Err(ConfigError::Invalid("PORT", "must not be 0".to_string()));
        }

        Ok(Self {
            base_url: env::var("OPEN_GYM_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            page_size,
            request_timeout: Duration::from_secs(timeout_secs),
            swipe_threshold_fraction,
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            port,
            fetch_on_startup: parse_var("FETCH_ON_STARTUP", defaults.fetch_on_startup)?,
        })
    }
}

/// Parse an optional environment variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, format!("could not parse {:?}", raw))),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}
