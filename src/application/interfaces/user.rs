use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the user account endpoints and the local session
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user
    ///
    /// When the reply carries a `user`, the navigator is sent to
    /// `LeagueRegistration` with the user's `id`, `sex` and `age`.
    async fn register(&self, data: Value) -> Result<Value, AppError>;

    /// Logs in
    ///
    /// When the reply carries an `accessToken`, it is stored and the navigator
    /// is sent to `Home`.
    async fn login(&self, data: Value) -> Result<Value, AppError>;

    /// Clears the stored token and navigates to `LandingPage`. No request is made.
    fn logout(&self) -> Result<(), AppError>;

    /// Whether a non-empty access token is held
    fn is_logged_in(&self) -> bool;

    /// Replaces and persists the access token
    fn set_access_token(&self, token: &str) -> Result<(), AppError>;
}
