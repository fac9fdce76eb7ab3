mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::{process::ExitCode, sync::Arc};

use serenity::all::ChannelId;

use crate::{
    bot::sink::ChannelSink, config::Config, error::AppError,
    scheduler::commit_notifications, service::dispatch::Dispatcher,
    service::notifier::CommitNotifier, state::BotState,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client(&config)?;
    let (github, pokeapi) = startup::setup_services(&config, http_client);

    let notify_channel = ChannelId::new(config.notify_channel_id);
    let state = BotState::new(
        Arc::new(Dispatcher::new(github.clone(), pokeapi)),
        config.command_prefix.clone(),
        notify_channel,
        config.repository.clone(),
    );

    tracing::info!("Tracking repository {}", config.repository);

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, state).await?;

    // Scheduler handle must stay alive for the lifetime of the bot
    let notifier = Arc::new(CommitNotifier::new(
        github,
        ChannelSink::new(discord_http, notify_channel),
    ));
    let _scheduler = commit_notifications::start_scheduler(notifier, config.poll_interval).await?;

    bot::start::start_bot(bot_client).await
}
