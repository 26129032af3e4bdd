// Common utilities for unit tests

use project_client::prelude::*;
use std::path::PathBuf;

/// Builds a configuration pointing at `base_url` without reading the environment
pub fn test_config(base_url: &str) -> Config {
    Config {
        rest_api: RestApiConfig {
            base_url: base_url.to_string(),
            timeout: 5,
        },
        storage: StorageConfig {
            path: PathBuf::from("unused-storage.json"),
        },
    }
}

/// Client wired to recording host integrations
pub struct TestClient {
    pub client: Client,
    pub navigator: Arc<RecordingNavigator>,
    pub errors: Arc<RecordingErrorSink>,
    pub store: Arc<MemoryTokenStore>,
}

/// Builds a client against `base_url`, optionally with a stored access token
pub fn test_client(base_url: &str, token: Option<&str>) -> TestClient {
    let navigator = Arc::new(RecordingNavigator::new());
    let errors = Arc::new(RecordingErrorSink::new());
    let store = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_entry(ACCESS_TOKEN_KEY, token),
        None => MemoryTokenStore::new(),
    });
    let client = Client::builder(test_config(base_url))
        .token_store(store.clone())
        .navigator(navigator.clone())
        .error_sink(errors.clone())
        .build()
        .expect("client should build");
    TestClient {
        client,
        navigator,
        errors,
        store,
    }
}
