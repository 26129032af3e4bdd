/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_STORE_PATH};
use crate::storage::config::StorageConfig;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Token storage configuration
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `API_BASE_URL` | `http://localhost:5000` |
    /// | `API_TIMEOUT` | `30` |
    /// | `TOKEN_STORE_PATH` | `.project-client/storage.json` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("API_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            storage: StorageConfig {
                path: PathBuf::from(get_env_or_default(
                    "TOKEN_STORE_PATH",
                    String::from(DEFAULT_TOKEN_STORE_PATH),
                )),
            },
        }
    }

    /// Creates a configuration pointing at `base_url`, other settings from the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.rest_api.base_url = base_url.into();
        config
    }
}
