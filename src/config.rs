use std::time::Duration;

use url::Url;

use crate::{
    error::{config::ConfigError, AppError},
    model::github::RepositoryCoordinates,
};

const GITHUB_API_URL: &str = "https://api.github.com/";
const POKEAPI_URL: &str = "https://pokeapi.co/api/v2/";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Startup configuration. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    /// Channel that receives new-commit and channel-deleted notifications.
    pub notify_channel_id: u64,
    pub command_prefix: String,

    pub repository: RepositoryCoordinates,
    pub github_token: Option<String>,
    pub github_api_url: Url,
    pub pokeapi_url: Url,

    pub poll_interval: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value for a variable name, if present
    ///
    /// # Returns
    /// - `Ok(Config)` - All required values present and valid
    /// - `Err(AppError::ConfigErr)` - A variable is missing or cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &str| {
            get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let notify_channel_id = parse_positive(
            "NOTIFY_CHANNEL_ID",
            require("NOTIFY_CHANNEL_ID")?,
        )?;

        let poll_interval = match get("POLL_INTERVAL_SECS") {
            Some(value) => parse_positive("POLL_INTERVAL_SECS", value)?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };
        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(value) => parse_positive("HTTP_TIMEOUT_SECS", value)?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let github_api_url = parse_base_url(
            "GITHUB_API_URL",
            get("GITHUB_API_URL").unwrap_or_else(|| GITHUB_API_URL.to_string()),
        )?;
        let pokeapi_url = parse_base_url(
            "POKEAPI_URL",
            get("POKEAPI_URL").unwrap_or_else(|| POKEAPI_URL.to_string()),
        )?;

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            notify_channel_id,
            command_prefix: get("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            repository: RepositoryCoordinates::new(
                require("GITHUB_REPO_OWNER")?,
                require("GITHUB_REPO_NAME")?,
            ),
            github_token: get("GITHUB_TOKEN"),
            github_api_url,
            pokeapi_url,
            poll_interval: Duration::from_secs(poll_interval),
            http_timeout: Duration::from_secs(http_timeout),
        })
    }
}

fn parse_positive(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        }),
    }
}

/// Parses an http(s) base URL that endpoint paths can be appended to.
fn parse_base_url(name: &str, value: String) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason,
    };

    let url = Url::parse(value.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid("must be an http or https URL".to_string()));
    }

    Ok(url)
}
