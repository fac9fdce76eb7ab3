use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Length of the abbreviated commit hash shown in chat.
const SHORT_SHA_LEN: usize = 7;

/// Owner and name of the tracked repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCoordinates {
    pub owner: String,
    pub name: String,
}

impl RepositoryCoordinates {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Result of a collection fetch.
///
/// An empty collection is a valid answer, kept distinct from failure so the reply
/// can say so explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Empty,
    Items(Vec<T>),
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }
}

/// Entry of the repository issues collection.
///
/// GitHub also lists pull requests on this endpoint; those carry a
/// `pull_request` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Entry of the repository pulls collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
}

/// Repository metadata. Every field is required; a response lacking one is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoStats {
    pub name: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

/// Raw entry of the commits collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub sha: String,
    #[serde(default)]
    pub html_url: Option<String>,
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Newest commit of the tracked repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Full commit hash; this is the identifier the notifier compares.
    pub sha: String,
    pub message: String,
    pub author: Option<String>,
    pub committed_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

impl CommitSummary {
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }

    /// First line of the commit message.
    pub fn headline(&self) -> &str {
        self.message.lines().next().unwrap_or_default().trim()
    }
}

impl From<CommitEntry> for CommitSummary {
    fn from(entry: CommitEntry) -> Self {
        let (author, committed_at) = match entry.commit.author {
            Some(author) => (Some(author.name), author.date),
            None => (None, None),
        };

        Self {
            sha: entry.sha,
            message: entry.commit.message,
            author,
            committed_at,
            url: entry.html_url,
        }
    }
}
