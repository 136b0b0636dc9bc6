use crate::error::ChatwootResult;
use async_trait::async_trait;

/// Interface for managing the account webhook the trigger listens on
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Looks for a registered webhook pointing at `url`
    ///
    /// # Returns
    /// * `Ok(Some(id))` - Id of the matching webhook
    /// * `Ok(None)` - No webhook targets the URL
    async fn check_exists(&self, url: &str) -> ChatwootResult<Option<u64>>;

    /// Registers `url` for the given events and returns the new webhook id
    async fn create(&self, url: &str, events: &[String]) -> ChatwootResult<u64>;

    /// Removes a webhook
    async fn delete(&self, id: u64) -> ChatwootResult<()>;
}
