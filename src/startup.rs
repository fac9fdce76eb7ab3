use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::{github::GitHubService, pokeapi::PokeApiService},
};

/// Installs the global tracing subscriber.
///
/// Log levels are taken from `RUST_LOG` and default to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client shared by both adapters.
///
/// Every request carries the configured timeout and a user agent naming this bot,
/// which GitHub requires on all API requests.
///
/// # Arguments
/// - `config` - Configuration holding the request timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client ready for use
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Builds both adapters on top of a shared HTTP client.
///
/// # Returns
/// - `(GitHubService, PokeApiService)` - Adapters bound to the configured base URLs
pub fn setup_services(
    config: &Config,
    http_client: reqwest::Client,
) -> (GitHubService, PokeApiService) {
    let github = GitHubService::new(
        http_client.clone(),
        config.github_api_url.clone(),
        config.repository.clone(),
        config.github_token.clone(),
    );
    let pokeapi = PokeApiService::new(http_client, config.pokeapi_url.clone());

    (github, pokeapi)
}
