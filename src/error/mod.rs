//! Error types for the bot.
//!
//! Each concern has its own error enum. `AdapterError` describes why a single
//! outbound API call failed and is always recovered locally by the dispatcher or
//! the notifier. `AppError` is the top-level error used during startup and by the
//! chat gateway, where failures are logged and, at startup, end the process.

pub mod adapter;
pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates every error that can surface outside of an adapter call. Most
/// variants use `#[from]` so `?` converts automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error while registering or starting the polling job.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep `AppError` small, as serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
