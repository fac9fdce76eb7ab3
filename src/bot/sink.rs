//! Outbound message sink.
//!
//! `ReplySink` is the only chat primitive the dispatcher and notifier depend on,
//! which keeps them testable without a Discord connection. `ChannelSink` is the
//! Discord implementation bound to one channel.

use serenity::{
    all::{ChannelId, CreateAllowedMentions, CreateMessage},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    util::message::{split_message, DISCORD_MESSAGE_LIMIT},
};

/// Destination for text produced by the bot.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sends `text`, splitting it if the platform requires.
    async fn send(&self, text: &str) -> Result<(), AppError>;
}

/// Sends messages to a single Discord channel.
#[derive(Clone)]
pub struct ChannelSink {
    /// Discord HTTP client for sending messages
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelSink {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

/// Builds one outgoing message with mention parsing disabled.
///
/// `@everyone`, role and user mentions in the text render as plain text.
fn build_message(chunk: String) -> CreateMessage {
    CreateMessage::new()
        .content(chunk)
        .allowed_mentions(CreateAllowedMentions::new())
}

#[async_trait]
impl ReplySink for ChannelSink {
    async fn send(&self, text: &str) -> Result<(), AppError> {
        for chunk in split_message(text, DISCORD_MESSAGE_LIMIT) {
            self.channel_id
                .send_message(&self.http, build_message(chunk))
                .await?;
        }

        Ok(())
    }
}
