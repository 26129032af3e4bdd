/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::league::LeagueService;
use crate::application::interfaces::project::ProjectService;
use crate::application::interfaces::referral::ReferralService;
use crate::application::interfaces::user::UserService;
use crate::application::navigation::{ErrorSink, Navigator, Route};
use crate::error::AppError;
use crate::model::http::{HttpClient, HttpClientBuilder};
use crate::model::responses::{field_or_null, present, unwrap_field};
use crate::storage::token_store::TokenStore;
use async_trait::async_trait;
use reqwest::multipart::Form;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Endpoint client for the project designer and league API
///
/// Every operation maps to one endpoint; see the service traits for the
/// post-processing each one applies.
pub struct Client {
    http_client: Arc<HttpClient>,
}

/// Builder for [`Client`], forwarding to [`HttpClientBuilder`]
pub struct ClientBuilder {
    inner: HttpClientBuilder,
}

impl ClientBuilder {
    /// Uses `store` to persist the access token
    #[must_use]
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.inner = self.inner.token_store(store);
        self
    }

    /// Uses `navigator` for redirects
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.inner = self.inner.navigator(navigator);
        self
    }

    /// Uses `sink` to report response errors
    #[must_use]
    pub fn error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.inner = self.inner.error_sink(sink);
        self
    }

    /// Builds the client
    pub fn build(self) -> Result<Client, AppError> {
        Ok(Client::from_http_client(Arc::new(self.inner.build()?)))
    }
}

impl Client {
    /// Creates a client with logging host integrations and a file token store
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::builder(config).build()
    }

    /// Starts a builder to plug in host integrations
    pub fn builder(config: Config) -> ClientBuilder {
        ClientBuilder {
            inner: HttpClient::builder(config),
        }
    }

    /// Wraps an existing request helper
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Underlying request helper
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    fn navigate(&self, route: Route) {
        debug!("Navigating to {}", route.name());
        self.http_client.navigator().push(route);
    }
}

#[async_trait]
impl ProjectService for Client {
    async fn get_project(&self, project_id: &str) -> Result<Value, AppError> {
        self.http_client
            .get(&format!("/project/{project_id}"))
            .await
    }

    async fn create_material(&self, data: Value) -> Result<Value, AppError> {
        self.http_client
            .post_json("/project/material/create", &data)
            .await
    }

    async fn create_material_form(&self, form: Form) -> Result<Value, AppError> {
        self.http_client
            .post_form("/project/material/create", form)
            .await
    }

    async fn get_materials(&self, project_id: &str) -> Result<Value, AppError> {
        let response = self
            .http_client
            .get(&format!("/project/materials/{project_id}"))
            .await?;
        Ok(unwrap_field(response, "materials"))
    }

    async fn update_material(&self, update_id: &str, data: Value) -> Result<Value, AppError> {
        self.http_client
            .post_json(&format!("/project/material/update/{update_id}"), &data)
            .await
    }

    async fn update_material_form(
        &self,
        update_id: &str,
        form: Form,
    ) -> Result<Value, AppError> {
        self.http_client
            .post_form(&format!("/project/material/update/{update_id}"), form)
            .await
    }

    async fn delete_material(&self, material_id: &str) -> Result<Value, AppError> {
        self.http_client
            .get(&format!("/project/material/delete/{material_id}"))
            .await
    }

    async fn update_line_item(&self, data: Value) -> Result<Value, AppError> {
        self.http_client
            .post_json("/project/material/line-item/update/", &data)
            .await
    }

    async fn duplicate_line_item(&self, id: &str) -> Result<Value, AppError> {
        self.http_client
            .get(&format!("/project/material/line-item/duplicate/{id}"))
            .await
    }

    async fn delete_line_item(&self, line_item_id: &str) -> Result<Value, AppError> {
        self.http_client
            .get(&format!("/project/material/line-item/delete/{line_item_id}"))
            .await
    }

    async fn get_line_items_with_materials(&self, project_id: &str) -> Result<Value, AppError> {
        let response = self
            .http_client
            .get(&format!("/project/material/line-items/both/{project_id}"))
            .await?;
        Ok(unwrap_field(response, "lineItemsWithMaterials"))
    }

    async fn get_public_projects(&self) -> Result<Value, AppError> {
        let response = self.http_client.get("/projects/public").await?;
        Ok(unwrap_field(response, "projects"))
    }

    async fn new_project(&self, data: Value) -> Result<Value, AppError> {
        let response = self.http_client.post_json("/project/create", &data).await?;
        if let Some(project) = present(&response, "project") {
            let id = field_or_null(project, "id");
            info!("Project created: {}", id);
            self.navigate(Route::DesignProject { id });
        }
        Ok(response)
    }
}

#[async_trait]
impl LeagueService for Client {
    async fn get_league_seasons(&self) -> Result<Value, AppError> {
        self.http_client.get("/league/getLeagueSeasons").await
    }

    async fn league_register(&self, data: Value) -> Result<Value, AppError> {
        let response = self.http_client.post_json("/league/register", &data).await?;
        if let Some(user) = present(&response, "user") {
            self.navigate(Route::InviteFriends { id: user.clone() });
        }
        Ok(response)
    }
}

#[async_trait]
impl ReferralService for Client {
    async fn add_to_wait_list(&self, data: &str) -> Result<Value, AppError> {
        let response = self
            .http_client
            .get(&format!("/referral/addToWaitList/{data}"))
            .await?;
        if present(&response, "user").is_some() {
            self.navigate(Route::WaitList);
        }
        Ok(response)
    }

    async fn invite_friend_create(&self, data: Value) -> Result<Value, AppError> {
        debug!("Creating friend invitation");
        let response = self
            .http_client
            .post_json("/referral/inviteFriendCreate", &data)
            .await?;
        if let Some(user) = present(&response, "user") {
            self.navigate(Route::SignAndDraft { id: user.clone() });
        }
        Ok(response)
    }
}

#[async_trait]
impl UserService for Client {
    async fn register(&self, data: Value) -> Result<Value, AppError> {
        let response = self.http_client.post_json("/user/register", &data).await?;
        if let Some(user) = present(&response, "user") {
            self.navigate(Route::LeagueRegistration {
                id: field_or_null(user, "id"),
                sex: field_or_null(user, "sex"),
                age: field_or_null(user, "age"),
            });
        }
        Ok(response)
    }

    async fn login(&self, data: Value) -> Result<Value, AppError> {
        let response = self.http_client.post_json("/user/login", &data).await?;
        match present(&response, "accessToken") {
            Some(token) => {
                info!("Logged in");
                let token = token.as_str().map_or_else(|| token.to_string(), str::to_string);
                self.http_client.set_access_token(&token)?;
                self.navigate(Route::Home);
            }
            None => debug!("Login reply carried no access token"),
        }
        Ok(response)
    }

    fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.http_client.set_access_token("")?;
        self.navigate(Route::LandingPage);
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        self.http_client.is_logged_in()
    }

    fn set_access_token(&self, token: &str) -> Result<(), AppError> {
        self.http_client.set_access_token(token)
    }
}
