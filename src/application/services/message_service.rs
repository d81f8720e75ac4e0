use crate::application::errors::BotError;
use crate::application::messaging::CommandDispatcher;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

/// Relays inbound messages to the dispatcher and sends replies back
pub struct MessageService<B: Bot> {
    bot: B,
    dispatcher: CommandDispatcher,
}

impl<B: Bot> MessageService<B> {
    pub fn new(bot: B, dispatcher: CommandDispatcher) -> Self {
        Self { bot, dispatcher }
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    /// Process an incoming message, replying in its channel when it is a
    /// recognized command. Returns whether a reply was sent.
    pub async fn process(&self, message: Message) -> Result<bool, BotError> {
        if message.author.is_bot {
            return Ok(false);
        }

        let Some(reply) = self.dispatcher.dispatch(&message).await else {
            return Ok(false);
        };

        self.bot.send_reply(&message.channel_id, &reply).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::application::services::testing::{FakeApi, RecordingBot};
    use crate::application::services::CommandService;
    use crate::domain::entities::User;

    fn relay(api: &Arc<FakeApi>) -> MessageService<RecordingBot> {
        let dispatcher = CommandDispatcher::new("!", CommandService::new(api.clone(), "!"));
        MessageService::new(RecordingBot::default(), dispatcher)
    }

    #[tokio::test]
    async fn test_reply_goes_to_originating_channel() {
        let api = Arc::new(FakeApi::default());
        let service = relay(&api);

        let sent = service
            .process(Message::new("777", User::new("1"), "!view 9999"))
            .await
            .unwrap();

        assert!(sent);
        let replies = service.bot().sent();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].0, "777");
        assert!(!replies[0].1.has_attachment());
    }

    #[tokio::test]
    async fn test_bot_authors_and_chatter_are_ignored() {
        let api = Arc::new(FakeApi::default());
        let service = relay(&api);

        let from_bot = Message::new("777", User::new("2").as_bot(), "!cameras");
        assert!(!service.process(from_bot).await.unwrap());
        assert!(!service.process(Message::new("777", User::new("1"), "nice aurora tonight")).await.unwrap());
        assert!(!service.process(Message::new("777", User::new("1"), "!forecast")).await.unwrap());

        assert!(service.bot().sent().is_empty());
        assert!(api.calls().is_empty());
    }
}
