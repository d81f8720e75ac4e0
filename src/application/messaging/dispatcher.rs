//! Message dispatcher - Routes recognized commands to their handlers

use crate::application::services::CommandService;
use crate::domain::entities::{Message, Reply};
use super::parser::MessageParser;

/// Parses messages and hands recognized commands to the command service
pub struct CommandDispatcher {
    parser: MessageParser,
    commands: CommandService,
}

impl CommandDispatcher {
    pub fn new(prefix: impl Into<String>, commands: CommandService) -> Self {
        Self {
            parser: MessageParser::new(prefix),
            commands,
        }
    }

    pub fn prefix(&self) -> &str {
        self.parser.prefix()
    }

    /// Dispatch a message. `None` means the message was not a command and
    /// nothing should be sent.
    pub async fn dispatch(&self, message: &Message) -> Option<Reply> {
        let invocation = self.parser.parse(message)?;

        tracing::info!(
            message = %message.id,
            channel = %invocation.channel_id,
            user = %invocation.user_id,
            "{}{} {:?}",
            self.prefix(),
            invocation.kind.keyword(),
            invocation.args
        );

        let reply = self.commands.execute(&invocation).await;

        tracing::debug!(
            message = %message.id,
            attachment = reply.has_attachment(),
            "reply ready"
        );
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::application::services::testing::FakeApi;
    use crate::domain::entities::User;

    fn dispatcher(api: &Arc<FakeApi>) -> CommandDispatcher {
        CommandDispatcher::new("!", CommandService::new(api.clone(), "!"))
    }

    fn msg(text: &str) -> Message {
        Message::new("100", User::new("200"), text)
    }

    #[tokio::test]
    async fn test_unknown_commands_do_nothing() {
        let api = Arc::new(FakeApi::default());
        let dispatcher = dispatcher(&api);

        for text in ["!kp", "!", "hello", "aurora 64 -21", "!!aurora 64 -21"] {
            assert!(dispatcher.dispatch(&msg(text)).await.is_none(), "{}", text);
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_aurora_scenario() {
        let api = Arc::new(FakeApi::default());
        let reply = dispatcher(&api).dispatch(&msg("!aurora 64.1 -21.9")).await.unwrap();

        assert_eq!(api.calls().len(), 1);
        assert!(reply.to_plain_text().contains('%'));
    }

    #[tokio::test]
    async fn test_each_listing_command_queries_catalog() {
        let api = Arc::new(FakeApi::default());
        let dispatcher = dispatcher(&api);

        assert!(dispatcher.dispatch(&msg("!cameras")).await.is_some());
        assert!(dispatcher.dispatch(&msg("!charts")).await.is_some());
        assert!(dispatcher.dispatch(&msg("!satellites")).await.is_some());
        assert_eq!(api.calls(), vec!["catalog"; 3]);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_still_a_reply() {
        let api = Arc::new(FakeApi::failing());
        let reply = dispatcher(&api).dispatch(&msg("!cameras")).await.unwrap();
        assert_eq!(reply.as_text(), Some("Error: Unable to fetch camera list: API returned HTTP 503"));
    }
}
