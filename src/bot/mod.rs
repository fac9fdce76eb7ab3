//! Discord bot integration.
//!
//! This module binds the dispatcher and notifier to Discord through Serenity. The
//! event handler turns prefixed messages into commands, relays replies to the
//! originating channel, and announces channel lifecycle events. The bot's HTTP
//! client is shared with the commit notifier so notifications go out over the
//! same connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive channel create and delete events
//! - `GUILD_MESSAGES` - Receive messages in guild channels
//! - `DIRECT_MESSAGES` - Receive commands sent in DMs
//! - `MESSAGE_CONTENT` - Read message text to find commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod sink;
pub mod start;
