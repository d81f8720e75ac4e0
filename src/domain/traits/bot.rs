use async_trait::async_trait;
use crate::domain::entities::Reply;
use crate::application::errors::BotError;

/// Bot trait - abstraction for messaging platform adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Deliver a reply to a channel
    async fn send_reply(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError>;
}
