/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors produced by the client
#[derive(Debug)]
pub enum AppError {
    /// Transport failure reported by the HTTP client
    Network(reqwest::Error),
    /// Response or payload JSON could not be (de)serialized
    Json(serde_json::Error),
    /// Local I/O failure, e.g. while persisting the token
    Io(std::io::Error),
    /// The API answered `401 Unauthorized`
    Unauthorized,
    /// The API answered with an unexpected status and a non-JSON body
    Unexpected(StatusCode),
    /// The token store failed
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
