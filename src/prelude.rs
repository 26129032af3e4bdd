/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Project Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use project_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:5000");
//! assert_eq!(config.rest_api.base_url, "http://localhost:5000");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, RestApiConfig};
/// Storage configuration
pub use crate::storage::config::StorageConfig;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Endpoint client
pub use crate::application::client::{Client, ClientBuilder};
/// Service interfaces
pub use crate::application::interfaces::{
    league::LeagueService, project::ProjectService, referral::ReferralService,
    user::UserService,
};
/// Request helper
pub use crate::model::http::{HttpClient, HttpClientBuilder};

// ============================================================================
// HOST INTEGRATION
// ============================================================================

/// Routes, navigators and error sinks
pub use crate::application::navigation::{
    ErrorSink, LogErrorSink, LogNavigator, Navigator, RecordingErrorSink, RecordingNavigator,
    Route,
};
/// Token stores
pub use crate::storage::token_store::{FileTokenStore, MemoryTokenStore, TokenStore};

// ============================================================================
// MODELS
// ============================================================================

/// Request payloads
pub use crate::model::requests::Payload;
/// Response helpers
pub use crate::model::responses::{field_or_null, is_truthy, present, unwrap_field};

/// Error type
pub use crate::error::AppError;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::multipart::{Form, Part};
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
