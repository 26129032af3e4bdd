use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the league endpoints
#[async_trait]
pub trait LeagueService: Send + Sync {
    /// Gets the league seasons
    async fn get_league_seasons(&self) -> Result<Value, AppError>;

    /// Registers the user in a league
    ///
    /// When the reply carries a `user`, the navigator is sent to
    /// `InviteFriends` with that user as `id`.
    async fn league_register(&self, data: Value) -> Result<Value, AppError>;
}
