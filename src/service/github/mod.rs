//! GitHub REST adapter.
//!
//! `GitHubService` translates the repository endpoints the bot relays into typed
//! records. It holds only immutable, cheaply cloneable state so one instance can
//! be shared by every command handler and the commit notifier concurrently.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

use crate::{
    error::adapter::AdapterError,
    model::github::{
        CommitEntry, CommitSummary, Issue, Listing, PullRequest, RepoStats,
        RepositoryCoordinates,
    },
    util::http::{endpoint, get_json},
};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Adapter for the GitHub repository endpoints.
#[derive(Clone)]
pub struct GitHubService {
    /// Shared HTTP client; carries the request timeout and user agent.
    http_client: reqwest::Client,
    /// Base URL of the GitHub REST API.
    base_url: Url,
    /// Repository every call targets.
    repository: RepositoryCoordinates,
    /// Optional bearer token sent with every request.
    token: Option<String>,
}

impl GitHubService {
    /// Creates a new GitHubService instance.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client configured with timeout and user agent
    /// - `base_url` - GitHub REST API base URL
    /// - `repository` - Owner and name of the tracked repository
    /// - `token` - Optional personal access token for authenticated requests
    ///
    /// # Returns
    /// - `GitHubService` - New service instance
    pub fn new(
        http_client: reqwest::Client,
        base_url: Url,
        repository: RepositoryCoordinates,
        token: Option<String>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            repository,
            token,
        }
    }

    pub fn repository(&self) -> &RepositoryCoordinates {
        &self.repository
    }

    /// Fetches the repository's issues, excluding pull requests.
    ///
    /// # Returns
    /// - `Ok(Listing::Items)` - At least one issue
    /// - `Ok(Listing::Empty)` - No issues (pull requests on this endpoint are ignored)
    /// - `Err(AdapterError)` - Transport, remote or decoding failure
    pub async fn fetch_issues(&self) -> Result<Listing<Issue>, AdapterError> {
        let issues: Vec<Issue> = self.get(&["issues"]).await?;

        Ok(issues
            .into_iter()
            .filter(|issue| !issue.is_pull_request())
            .collect::<Vec<_>>()
            .into())
    }

    /// Fetches the repository's open pull requests.
    ///
    /// # Returns
    /// - `Ok(Listing::Items)` - At least one pull request
    /// - `Ok(Listing::Empty)` - No pull requests
    /// - `Err(AdapterError)` - Transport, remote or decoding failure
    pub async fn fetch_pull_requests(&self) -> Result<Listing<PullRequest>, AdapterError> {
        let pulls: Vec<PullRequest> = self.get(&["pulls"]).await?;

        Ok(pulls.into())
    }

    /// Fetches name, star count and fork count of the repository.
    ///
    /// # Returns
    /// - `Ok(RepoStats)` - All three fields present
    /// - `Err(AdapterError::MalformedResponse)` - A field is missing or mistyped
    /// - `Err(AdapterError)` - Transport or remote failure
    pub async fn fetch_repo_stats(&self) -> Result<RepoStats, AdapterError> {
        self.get(&[]).await
    }

    /// Fetches the newest commit on the default branch.
    ///
    /// Only one commit is requested (`per_page=1`).
    ///
    /// # Returns
    /// - `Ok(CommitSummary)` - Newest commit
    /// - `Err(AdapterError::EmptyHistory)` - Repository has no commits
    /// - `Err(AdapterError)` - Transport, remote or decoding failure
    pub async fn fetch_latest_commit(&self) -> Result<CommitSummary, AdapterError> {
        let url = self.repo_endpoint(&["commits"])?;
        let request = self.request(url.clone()).query(&[("per_page", "1")]);

        let commits: Vec<CommitEntry> = get_json(request, &url).await?;

        commits
            .into_iter()
            .next()
            .map(CommitSummary::from)
            .ok_or(AdapterError::EmptyHistory)
    }

    /// Builds `repos/{owner}/{name}/{segments..}` on top of the base URL.
    fn repo_endpoint(&self, segments: &[&str]) -> Result<Url, AdapterError> {
        let mut path = vec![
            "repos",
            self.repository.owner.as_str(),
            self.repository.name.as_str(),
        ];
        path.extend_from_slice(segments);

        endpoint(&self.base_url, &path)
    }

    fn request(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self
            .http_client
            .get(url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE);

        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, AdapterError> {
        let url = self.repo_endpoint(segments)?;

        get_json(self.request(url.clone()), &url).await
    }
}

#[cfg(test)]
mod test;
