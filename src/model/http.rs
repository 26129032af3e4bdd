/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::navigation::{ErrorSink, LogErrorSink, LogNavigator, Navigator, Route};
use crate::constants::{ACCESS_TOKEN_KEY, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::Payload;
use crate::model::responses::present;
use crate::storage::token_store::{FileTokenStore, TokenStore};
use crate::utils::id::request_id;
use reqwest::Client as HttpInternalClient;
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::{Instrument, debug, error, info, info_span, warn};

/// Request helper shared by every endpoint operation
///
/// It handles:
/// - composing the base URL with the endpoint path
/// - picking `GET` or `POST` from the payload
/// - the bearer token and its persistence
/// - redirecting to the login route on `401`
/// - forwarding the `errors` field of a response to the error sink
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    access_token: RwLock<Option<String>>,
    token_store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    error_sink: Arc<dyn ErrorSink>,
}

/// Builder for [`HttpClient`]
///
/// Every host integration defaults to a logging or file-backed implementation.
pub struct HttpClientBuilder {
    config: Config,
    token_store: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
    error_sink: Option<Arc<dyn ErrorSink>>,
}

impl HttpClientBuilder {
    /// Starts a builder from `config`
    pub fn new(config: Config) -> Self {
        Self {
            config,
            token_store: None,
            navigator: None,
            error_sink: None,
        }
    }

    /// Uses `store` to persist the access token
    #[must_use]
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Uses `navigator` for redirects
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Uses `sink` to report response errors
    #[must_use]
    pub fn error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = Some(sink);
        self
    }

    /// Builds the client and loads the persisted access token
    pub fn build(self) -> Result<HttpClient, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(self.config.rest_api.timeout))
            .build()?;
        let token_store: Arc<dyn TokenStore> = match self.token_store {
            Some(store) => store,
            None => Arc::new(FileTokenStore::from_config(&self.config.storage)),
        };
        let navigator: Arc<dyn Navigator> = match self.navigator {
            Some(navigator) => navigator,
            None => Arc::new(LogNavigator),
        };
        let error_sink: Arc<dyn ErrorSink> = match self.error_sink {
            Some(sink) => sink,
            None => Arc::new(LogErrorSink),
        };

        let access_token = match token_store.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                error!("Failed to read stored access token: {e}");
                None
            }
        };

        Ok(HttpClient {
            http_client,
            config: Arc::new(self.config),
            access_token: RwLock::new(access_token),
            token_store,
            navigator,
            error_sink,
        })
    }
}

impl HttpClient {
    /// Creates a client with default host integrations
    pub fn new(config: Config) -> Result<Self, AppError> {
        HttpClientBuilder::new(config).build()
    }

    /// Starts a builder to plug in host integrations
    pub fn builder(config: Config) -> HttpClientBuilder {
        HttpClientBuilder::new(config)
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Host navigator
    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Full URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path
        )
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        self.request(path, Payload::None).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, AppError> {
        self.request(path, Payload::json(body)?).await
    }

    /// Makes a POST request with a multipart form body
    pub async fn post_form(&self, path: &str, form: Form) -> Result<Value, AppError> {
        self.request(path, form.into()).await
    }

    /// Sends `payload` to `path` and returns the parsed JSON body
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed body, even when it carries an `errors` field
    /// * `Err(AppError::Unauthorized)` - The API answered `401`; the navigator was sent to [`Route::Login`]
    /// * `Err(AppError)` - Transport or parsing failure
    pub async fn request(&self, path: &str, payload: Payload) -> Result<Value, AppError> {
        let span = info_span!("request", id = %request_id());
        self.request_internal(path, payload).instrument(span).await
    }

    async fn request_internal(&self, path: &str, payload: Payload) -> Result<Value, AppError> {
        let method = payload.method();
        info!("Request: {} {}", method, path);

        let mut request = self.http_client.request(method, self.url(path));
        request = match payload {
            Payload::None => request,
            Payload::Json(body) => request.json(&body),
            Payload::Form(form) => request.multipart(form),
        };
        request = self.add_auth_header(request);

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            warn!("Unauthorized request to {}, redirecting to login", path);
            self.navigator.push(Route::Login);
            return Err(AppError::Unauthorized);
        }

        let text = response.text().await?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(AppError::Json(e)),
            Err(_) => {
                error!("Request failed with status {}: {}", status, text);
                return Err(AppError::Unexpected(status));
            }
        };

        if let Some(errors) = present(&body, "errors") {
            debug!("Forwarding response errors: {}", errors);
            self.error_sink.commit(errors.clone());
        }

        Ok(body)
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        match self.access_token() {
            Some(token) if !token.is_empty() => {
                request.header("Authorization", format!("Bearer {token}"))
            }
            _ => request,
        }
    }

    /// Current access token
    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the access token and persists it
    ///
    /// An empty token is the logged-out value.
    pub fn set_access_token(&self, token: &str) -> Result<(), AppError> {
        {
            let mut current = self
                .access_token
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = Some(token.to_string());
        }
        self.token_store.set(ACCESS_TOKEN_KEY, token)
    }

    /// Whether a non-empty access token is held
    pub fn is_logged_in(&self) -> bool {
        self.access_token().is_some_and(|token| !token.is_empty())
    }
}
