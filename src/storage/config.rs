use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the persisted key/value storage holding the access token
#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Path of the JSON storage file
    pub path: PathBuf,
}
