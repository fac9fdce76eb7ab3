use test_utils::{
    builder::TestBuilder,
    context::UNREACHABLE_BASE_URL,
    fixture::{self, github::{DEFAULT_OWNER, DEFAULT_REPO}},
};
use url::Url;

use crate::{
    model::{command::Command, github::RepositoryCoordinates},
    service::{
        dispatch::{format, Dispatcher, Route},
        github::GitHubService,
        pokeapi::PokeApiService,
    },
};

mod routing;

/// Creates a dispatcher whose adapters both point at `base_url`.
fn dispatcher(base_url: &str) -> Dispatcher {
    let http_client = reqwest::Client::new();
    let base_url = Url::parse(base_url).unwrap();

    Dispatcher::new(
        GitHubService::new(
            http_client.clone(),
            base_url.clone(),
            RepositoryCoordinates::new(DEFAULT_OWNER, DEFAULT_REPO),
            None,
        ),
        PokeApiService::new(http_client, base_url),
    )
}
