//! Bot state shared across all event handlers.
//!
//! `BotState` is built once at startup and handed to the Discord event handler.
//! Serenity runs each event in its own task, so the state is cloned cheaply
//! (the dispatcher sits behind an `Arc`) and never mutated.

use serenity::all::ChannelId;
use std::sync::Arc;

use crate::{model::github::RepositoryCoordinates, service::dispatch::Dispatcher};

#[derive(Clone)]
pub struct BotState {
    /// Routes prefixed commands to the adapters.
    pub dispatcher: Arc<Dispatcher>,

    /// Prefix that marks a message as a command, e.g. `!`.
    pub command_prefix: String,

    /// Channel receiving commit and channel-deleted notifications.
    pub notify_channel: ChannelId,

    /// Tracked repository, shown in the bot's activity.
    pub repository: RepositoryCoordinates,
}

impl BotState {
    /// Creates a new bot state.
    ///
    /// # Arguments
    /// - `dispatcher` - Command dispatcher shared by all message events
    /// - `command_prefix` - Command prefix
    /// - `notify_channel` - Notification channel
    /// - `repository` - Tracked repository
    ///
    /// # Returns
    /// - `BotState` - Initialized state ready for use
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        command_prefix: String,
        notify_channel: ChannelId,
        repository: RepositoryCoordinates,
    ) -> Self {
        Self {
            dispatcher,
            command_prefix,
            notify_channel,
            repository,
        }
    }
}
