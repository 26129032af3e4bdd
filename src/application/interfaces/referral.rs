use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the referral endpoints
#[async_trait]
pub trait ReferralService: Send + Sync {
    /// Adds a contact to the wait list
    ///
    /// `data` is appended to the path as is. When the reply carries a `user`,
    /// the navigator is sent to `WaitList`.
    async fn add_to_wait_list(&self, data: &str) -> Result<Value, AppError>;

    /// Creates a friend invitation
    ///
    /// When the reply carries a `user`, the navigator is sent to
    /// `SignAndDraft` with that user as `id`.
    async fn invite_friend_create(&self, data: Value) -> Result<Value, AppError>;
}
