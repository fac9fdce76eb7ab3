//! Channel event handlers for Discord guild channels.
//!
//! New text channels get a short greeting. Deleted channels are announced in the
//! notification channel, since the deleted channel can no longer receive messages.

use serenity::all::{ChannelType, Context, GuildChannel, Message};

use crate::{
    bot::sink::{ChannelSink, ReplySink},
    state::BotState,
};

/// Handles the channel_create event when a channel is created in a guild.
///
/// Only text channels are greeted; other kinds cannot receive messages.
///
/// # Arguments
/// - `ctx` - Discord context for sending the greeting
/// - `channel` - The newly created guild channel from Discord
pub async fn handle_channel_create(ctx: Context, channel: GuildChannel) {
    if channel.kind != ChannelType::Text {
        tracing::debug!(
            "Ignoring non-text channel {} (type: {:?}) in guild {}",
            channel.name,
            channel.kind,
            channel.guild_id
        );
        return;
    }

    let sink = ChannelSink::new(ctx.http.clone(), channel.id);

    if let Err(e) = sink.send("Channel created!").await {
        tracing::error!(
            "Failed to greet new channel {} in guild {}: {}",
            channel.name,
            channel.guild_id,
            e
        );
    }
}

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// # Arguments
/// - `state` - Bot state holding the notification channel
/// - `ctx` - Discord context for sending the announcement
/// - `channel` - The deleted guild channel from Discord
/// - `_messages` - Messages that were in the channel if available (unused)
pub async fn handle_channel_delete(
    state: &BotState,
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    if channel.id == state.notify_channel {
        tracing::warn!(
            "Notification channel {} was deleted; notifications will fail until it is reconfigured",
            channel.id
        );
        return;
    }

    let sink = ChannelSink::new(ctx.http.clone(), state.notify_channel);

    if let Err(e) = sink.send(&format!("Channel deleted: #{}", channel.name)).await {
        tracing::error!(
            "Failed to announce deletion of channel {} in guild {}: {}",
            channel.name,
            channel.guild_id,
            e
        );
    }
}
