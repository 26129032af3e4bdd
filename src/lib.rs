/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Project Client
//!
//! Async client for the project designer and league REST API.
//!
//! The client composes the configured base URL, an optional bearer token and
//! a JSON or multipart payload into a request. Responses are routed either to
//! the host application's [`Navigator`](crate::application::navigation::Navigator)
//! (on `401` and after a few successful flows) or to its shared
//! [`ErrorSink`](crate::application::navigation::ErrorSink) when the body
//! carries an `errors` field.
//!
//! ## Example
//!
//! ```ignore
//! use project_client::prelude::*;
//!
//! setup_logger();
//! let config = Config::new();
//! let client = Client::builder(config)
//!     .navigator(Arc::new(MyRouter::default()))
//!     .build()?;
//!
//! let materials = client.get_materials("42").await?;
//! ```

/// Application layer: configuration, client and service interfaces
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Transport and wire models
pub mod model;

/// Convenient re-exports
pub mod prelude;

/// Access token persistence
pub mod storage;

/// Helpers for environment lookup, logging and ids
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
