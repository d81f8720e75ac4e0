//! Discord adapter
//!
//! One gateway shard for inbound messages, one shared twilight HTTP client
//! for replies. Messages are handled one at a time, in gateway order.

use async_trait::async_trait;
use std::sync::Arc;

use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::channel::message::embed::Embed;
use twilight_model::gateway::event::Event;
use twilight_model::gateway::payload::incoming::MessageCreate;
use twilight_model::http::attachment::Attachment;
use twilight_model::id::{marker::ChannelMarker, Id};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder, ImageSource};

use crate::application::errors::BotError;
use crate::application::messaging::CommandDispatcher;
use crate::application::services::{formatter, MessageService};
use crate::domain::entities::{EmbedCard, EmbedImage, Message, Reply, User};
use crate::domain::traits::Bot;

/// Discord's limit on plain message content
const MAX_CONTENT_LEN: usize = 2000;

/// Discord bot adapter
pub struct DiscordAdapter {
    token: String,
    http: Arc<Client>,
    name: String,
}

impl DiscordAdapter {
    pub fn new(token: impl Into<String>, name: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            http: Arc::new(Client::new(token.clone())),
            token,
            name: name.into(),
        }
    }

    /// Connect to the gateway and relay messages until the stream ends
    pub async fn run(self, dispatcher: CommandDispatcher) -> Result<(), BotError> {
        let intents = Intents::GUILDS
            | Intents::GUILD_MESSAGES
            | Intents::DIRECT_MESSAGES
            | Intents::MESSAGE_CONTENT;
        let mut shard = Shard::new(ShardId::new(0, 1), self.token.clone(), intents);
        let wanted = EventTypeFlags::READY | EventTypeFlags::MESSAGE_CREATE;

        let service = MessageService::new(self, dispatcher);
        tracing::info!("{} is connecting to Discord...", service.bot().name);

        while let Some(item) = shard.next_event(wanted).await {
            let event = match item {
                Ok(event) => event,
                Err(source) => {
                    tracing::error!(?source, "gateway event stream error");
                    continue;
                }
            };

            match event {
                Event::Ready(ready) => {
                    tracing::info!(user = %ready.user.name, id = ready.user.id.get(), "connected to Discord");
                }
                Event::MessageCreate(msg) => {
                    let message = to_message(&msg);
                    if let Err(e) = service.process(message).await {
                        tracing::warn!(channel = msg.channel_id.get(), "failed to send reply: {}", e);
                    }
                }
                _ => {}
            }
        }

        tracing::info!("gateway stream closed");
        Ok(())
    }
}

#[async_trait]
impl Bot for DiscordAdapter {
    async fn send_reply(&self, channel_id: &str, reply: &Reply) -> Result<(), BotError> {
        let channel = parse_channel_id(channel_id)?;

        match reply {
            Reply::Text(text) => {
                let content = formatter::truncate(text, MAX_CONTENT_LEN);
                self.http
                    .create_message(channel)
                    .content(&content)
                    .await
                    .map_err(platform_error)?;
            }
            Reply::Embed(card) => {
                let embeds = [render_embed(card)?];
                self.http
                    .create_message(channel)
                    .embeds(&embeds)
                    .await
                    .map_err(platform_error)?;
            }
            Reply::Image { card, file } => {
                let embeds = [render_embed(card)?];
                let attachments = [Attachment::from_bytes(file.filename.clone(), file.bytes.clone(), 1)];
                self.http
                    .create_message(channel)
                    .embeds(&embeds)
                    .attachments(&attachments)
                    .await
                    .map_err(platform_error)?;
            }
        }

        Ok(())
    }
}

fn platform_error(err: twilight_http::Error) -> BotError {
    BotError::Platform(err.to_string())
}

/// Convert a gateway message into the relay's message type
pub fn to_message(msg: &MessageCreate) -> Message {
    let author = User {
        id: msg.author.id.get().to_string(),
        is_bot: msg.author.bot,
    };

    Message::new(msg.channel_id.get().to_string(), author, msg.content.clone())
        .with_id(msg.id.get().to_string())
}

pub fn parse_channel_id(raw: &str) -> Result<Id<ChannelMarker>, BotError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .and_then(Id::new_checked)
        .ok_or_else(|| BotError::InvalidChannel(raw.to_string()))
}

/// Build a validated twilight embed from a card
pub fn render_embed(card: &EmbedCard) -> Result<Embed, BotError> {
    let mut builder = EmbedBuilder::new().title(card.title.clone()).color(card.color);

    if let Some(description) = &card.description {
        builder = builder.description(description.clone());
    }
    for field in &card.fields {
        let built = EmbedFieldBuilder::new(field.name.clone(), field.value.clone());
        let built = if field.inline { built.inline() } else { built };
        builder = builder.field(built.build());
    }
    if let Some(footer) = &card.footer {
        builder = builder.footer(EmbedFooterBuilder::new(footer.clone()).build());
    }
    if let Some(image) = &card.image {
        let source = match image {
            EmbedImage::Url(url) => {
                ImageSource::url(url.clone()).map_err(|e| BotError::Platform(e.to_string()))?
            }
            EmbedImage::Attachment(filename) => ImageSource::attachment(filename.clone())
                .map_err(|e| BotError::Platform(e.to_string()))?,
        };
        builder = builder.image(source);
    }

    let embed = builder
        .validate()
        .map_err(|e| BotError::Platform(format!("invalid embed: {}", e)))?
        .build();
    Ok(embed)
}
