//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Logs the
//! connected user and advertises the tracked repository as the bot's activity.

use serenity::all::{ActivityData, Context, Ready};

use crate::state::BotState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Bot state holding the tracked repository
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &BotState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching(state.repository.to_string())));
}
