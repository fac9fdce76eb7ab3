use serenity::all::{Context, Message};

use crate::{
    bot::sink::{ChannelSink, ReplySink},
    model::command::Command,
    state::BotState,
};

/// Handle message creation in a channel
///
/// Messages from bots (including this one) are ignored. Prefixed messages are
/// parsed into commands and dispatched; the reply goes back to the originating
/// channel. Unknown commands get no reply.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let Some(command) = Command::parse(&message.content, &state.command_prefix) else {
        return;
    };

    let Some(reply) = state.dispatcher.dispatch(&command).await else {
        return;
    };

    let sink = ChannelSink::new(ctx.http.clone(), message.channel_id);

    if let Err(e) = sink.send(&reply).await {
        tracing::error!(
            "Failed to reply to '{}' in channel {}: {}",
            command.name,
            message.channel_id,
            e
        );
    }
}
