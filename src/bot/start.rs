use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::BotState};

/// Builds the Discord client without connecting.
///
/// The returned HTTP client can send messages before the gateway connection is
/// up, which lets the notifier be wired before the bot starts.
///
/// # Arguments
/// - `config` - Configuration holding the bot token
/// - `state` - State handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start, and its HTTP client
/// - `Err(AppError::DiscordErr)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: &Config, state: BotState) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and runs until shutdown.
///
/// # Returns
/// - `Ok(())` - Bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
