use test_utils::{
    builder::TestBuilder,
    context::UNREACHABLE_BASE_URL,
    fixture::{self, github::{DEFAULT_OWNER, DEFAULT_REPO}},
};
use url::Url;

use crate::{
    error::adapter::AdapterError,
    model::github::{Listing, RepositoryCoordinates},
    service::github::GitHubService,
};

mod repo_stats;

/// Creates a service for the fixture repository pointed at `base_url`.
fn service(base_url: &str, token: Option<&str>) -> GitHubService {
    GitHubService::new(
        reqwest::Client::new(),
        Url::parse(base_url).unwrap(),
        RepositoryCoordinates::new(DEFAULT_OWNER, DEFAULT_REPO),
        token.map(str::to_string),
    )
}
