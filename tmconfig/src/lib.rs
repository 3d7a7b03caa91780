//! # tmweb Configuration Module
//!
//! This module provides startup configuration for tmweb:
//! - Reading settings from environment variables
//! - Typed defaults for everything that is not set
//!
//! The configuration is built once at startup and handed to the
//! components that need it; nothing reads the environment after that.
//!
//! ## Usage
//!
//! ```no_run
//! use tmconfig::Config;
//!
//! let config = Config::from_env()?;
//! println!("HTTP port: {}", config.get_http_port());
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use std::env;
use tracing::info;

/// Environment variable holding the HTTP listen port
const ENV_HTTP_PORT: &str = "PORT";

/// Environment variable overriding the CMS items API base URL
const ENV_API_BASE_URL: &str = "TMWEB_API_URL";

// Default values for configuration
const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_API_BASE_URL: &str = "https://fdnd-agency.directus.app/items";

/// Startup configuration for tmweb
///
/// Holds the HTTP listen port and the base URL of the CMS items API.
/// Built from the environment with [`Config::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    http_port: u16,
    api_base_url: String,
}

impl Config {
    /// Build a configuration from the process environment
    ///
    /// Reads `PORT` (default 8080) and `TMWEB_API_URL` (default: the
    /// production Directus items endpoint). A `PORT` value that is not a
    /// valid port number is a startup error.
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            http_port = config.http_port,
            api_base_url = %config.api_base_url,
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http_port = match lookup(ENV_HTTP_PORT) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid {} value: {:?}", ENV_HTTP_PORT, raw))?,
            None => DEFAULT_HTTP_PORT,
        };

        let api_base_url =
            lookup(ENV_API_BASE_URL).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            http_port,
            api_base_url,
        })
    }

    /// HTTP port the server should listen on
    pub fn get_http_port(&self) -> u16 {
        self.http_port
    }

    /// Base URL of the CMS items API (no trailing slash expected)
    pub fn get_api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
