//! Message parser - Recognizes prefixed commands in raw chat messages

use crate::domain::entities::{CommandKind, Invocation, Message};

/// Default command prefix
pub const DEFAULT_PREFIX: &str = "!";

/// Parses incoming messages into command invocations
#[derive(Debug, Clone)]
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            command_prefix: if prefix.is_empty() { DEFAULT_PREFIX.to_string() } else { prefix },
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Parse a message into an invocation.
    ///
    /// Returns `None` for anything that is not a known command: text without
    /// the prefix, a bare prefix, or an unrecognized keyword.
    pub fn parse(&self, message: &Message) -> Option<Invocation> {
        let (kind, args) = self.parse_text(&message.text)?;

        Some(
            Invocation::new(kind, args)
                .with_channel(message.channel_id.clone())
                .with_user(message.author.id.clone()),
        )
    }

    /// Split raw text into a command and its whitespace-separated arguments
    pub fn parse_text(&self, text: &str) -> Option<(CommandKind, Vec<String>)> {
        let cmd_text = text.trim().strip_prefix(&self.command_prefix)?;

        let mut parts = cmd_text.split_whitespace();
        let kind = CommandKind::from_keyword(parts.next()?)?;
        let args = parts.map(str::to_string).collect();

        Some((kind, args))
    }
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
