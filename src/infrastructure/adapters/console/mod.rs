//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::errors::BotError;
use crate::application::messaging::CommandDispatcher;
use crate::application::services::MessageService;
use crate::domain::entities::{Message, Reply, User};
use crate::domain::traits::Bot;

const CONSOLE_CHANNEL: &str = "console";

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    name: String,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Read commands from stdin until EOF or `quit`
    pub async fn run(self, dispatcher: CommandDispatcher) -> Result<(), BotError> {
        let prefix = dispatcher.prefix().to_string();
        let service = MessageService::new(self, dispatcher);
        let user = User::new("console-user");

        println!("{} console mode. Try `{}help`, `quit` to exit.", service.bot().name, prefix);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| BotError::Internal(e.to_string()))?
        {
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                break;
            }
            if line.is_empty() {
                continue;
            }

            let message = Message::new(CONSOLE_CHANNEL, user.clone(), line);
            if !service.process(message).await? {
                println!("(no command recognized)");
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn send_reply(&self, _channel_id: &str, reply: &Reply) -> Result<(), BotError> {
        println!("[BOT] {}", reply.to_plain_text());
        Ok(())
    }
}
