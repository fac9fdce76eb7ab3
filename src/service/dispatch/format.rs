//! Reply formatting for adapter results.
//!
//! Every function here turns one adapter result into the exact text sent to the
//! channel. Failures become a fixed apology; the raw error is only logged.

use crate::{
    error::adapter::AdapterError,
    model::{
        github::{CommitSummary, Issue, Listing, PullRequest, RepoStats, RepositoryCoordinates},
        pokemon::Species,
    },
};

pub const NO_ISSUES: &str = "No issues found.";
pub const NO_PULL_REQUESTS: &str = "No pull requests found.";
pub const NO_COMMITS: &str = "No commits found.";
pub const POKEDEX_USAGE: &str = "Please provide a Pokémon name to look up.";

pub fn issues(result: Result<Listing<Issue>, AdapterError>) -> String {
    match result {
        Ok(Listing::Items(issues)) => issues
            .iter()
            .map(|issue| entry_line(issue.number, &issue.title, &issue.html_url))
            .collect::<Vec<_>>()
            .join("\n"),
        Ok(Listing::Empty) => NO_ISSUES.to_string(),
        Err(e) => failure("issues", &e),
    }
}

pub fn pull_requests(result: Result<Listing<PullRequest>, AdapterError>) -> String {
    match result {
        Ok(Listing::Items(pulls)) => pulls
            .iter()
            .map(|pull| entry_line(pull.number, &pull.title, &pull.html_url))
            .collect::<Vec<_>>()
            .join("\n"),
        Ok(Listing::Empty) => NO_PULL_REQUESTS.to_string(),
        Err(e) => failure("pull requests", &e),
    }
}

pub fn repo_stats(result: Result<RepoStats, AdapterError>) -> String {
    match result {
        Ok(stats) => format!(
            "Repository: {}, Stars: {}, Forks: {}",
            stats.name, stats.stargazers_count, stats.forks_count
        ),
        Err(e) => failure("repository statistics", &e),
    }
}

/// Formats a species lookup.
///
/// # Arguments
/// - `query` - The lookup as typed by the user, echoed back on a miss
/// - `result` - Adapter result
pub fn species(query: &str, result: Result<Species, AdapterError>) -> String {
    match result {
        Ok(species) => format!(
            "{} - Height: {}, Weight: {}",
            species.display_name(),
            species.height,
            species.weight
        ),
        Err(AdapterError::NotFound { .. }) => format!("Pokémon {} not found.", query.trim()),
        Err(AdapterError::InvalidArgument(reason)) => {
            tracing::debug!("Rejected pokedex lookup: {}", reason);
            POKEDEX_USAGE.to_string()
        }
        Err(e) => failure("Pokémon data", &e),
    }
}

pub fn latest_commit(result: Result<CommitSummary, AdapterError>) -> String {
    match result {
        Ok(commit) => {
            let mut line = format!("Latest commit {}: {}", commit.short_sha(), commit.headline());
            if let Some(author) = &commit.author {
                line.push_str(&format!(" by {}", author));
            }
            if let Some(url) = &commit.url {
                line.push_str(&format!(" - {}", url));
            }
            line
        }
        Err(AdapterError::EmptyHistory) => NO_COMMITS.to_string(),
        Err(e) => failure("the latest commit", &e),
    }
}

/// Formats the message posted when the notifier sees a new commit.
///
/// The commit time is rendered as a Discord relative timestamp when known.
pub fn commit_notification(repository: &RepositoryCoordinates, commit: &CommitSummary) -> String {
    let mut line = format!(
        "New commit on {}: {} {}",
        repository,
        commit.short_sha(),
        commit.headline()
    );
    if let Some(author) = &commit.author {
        line.push_str(&format!(" by {}", author));
    }
    if let Some(committed_at) = commit.committed_at {
        line.push_str(&format!(" (<t:{}:R>)", committed_at.timestamp()));
    }
    if let Some(url) = &commit.url {
        line.push_str(&format!(" - {}", url));
    }
    line
}

fn entry_line(number: u64, title: &str, url: &str) -> String {
    format!("#{}: {} - {}", number, title, url)
}

/// Logs the raw failure and returns the fixed apology for `resource`.
fn failure(resource: &str, err: &AdapterError) -> String {
    tracing::error!(kind = err.kind(), "Error fetching {}: {}", resource, err);

    format!("An error occurred while fetching {}.", resource)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn transport() -> AdapterError {
        AdapterError::Transport {
            url: "https://api.github.com/repos/o/n/issues".to_string(),
            message: "dns error: secret-host.internal".to_string(),
        }
    }

    fn commit() -> CommitSummary {
        CommitSummary {
            sha: "a1b2c3d4e5f6".to_string(),
            message: "Add pokedex command\n\nbody".to_string(),
            author: Some("Ash".to_string()),
            committed_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            url: Some("https://github.com/o/n/commit/a1b2c3d4e5f6".to_string()),
        }
    }

    #[test]
    fn formats_issue_lines() {
        let listing = Listing::Items(vec![
            Issue {
                number: 1,
                title: "First".to_string(),
                html_url: "https://github.com/o/n/issues/1".to_string(),
                pull_request: None,
            },
            Issue {
                number: 2,
                title: "Second".to_string(),
                html_url: "https://github.com/o/n/issues/2".to_string(),
                pull_request: None,
            },
        ]);

        assert_eq!(
            issues(Ok(listing)),
            "#1: First - https://github.com/o/n/issues/1\n#2: Second - https://github.com/o/n/issues/2"
        );
    }

    #[test]
    fn formats_empty_collections() {
        assert_eq!(issues(Ok(Listing::Empty)), "No issues found.");
        assert_eq!(pull_requests(Ok(Listing::Empty)), "No pull requests found.");
    }

    #[test]
    fn formats_stats() {
        let stats = RepoStats {
            name: "DexIndex0".to_string(),
            stargazers_count: 5,
            forks_count: 2,
        };

        assert_eq!(
            repo_stats(Ok(stats)),
            "Repository: DexIndex0, Stars: 5, Forks: 2"
        );
    }

    #[test]
    fn formats_species() {
        let pikachu = Species {
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
        };

        assert_eq!(
            species("pikachu", Ok(pikachu)),
            "Pikachu - Height: 4, Weight: 60"
        );
    }

    #[test]
    fn not_found_mentions_query() {
        let result = Err(AdapterError::NotFound {
            name: "missingno".to_string(),
        });

        assert_eq!(species(" MissingNo ", result), "Pokémon MissingNo not found.");
    }

    #[test]
    fn failures_do_not_leak_detail() {
        let reply = issues(Err(transport()));

        assert_eq!(reply, "An error occurred while fetching issues.");
        assert!(!reply.contains("secret-host"));
    }

    #[test]
    fn empty_history_is_not_a_failure() {
        assert_eq!(latest_commit(Err(AdapterError::EmptyHistory)), NO_COMMITS);
    }

    #[test]
    fn formats_latest_commit() {
        assert_eq!(
            latest_commit(Ok(commit())),
            "Latest commit a1b2c3d: Add pokedex command by Ash - https://github.com/o/n/commit/a1b2c3d4e5f6"
        );
    }

    #[test]
    fn formats_commit_notification() {
        let repository = RepositoryCoordinates::new("o", "n");

        assert_eq!(
            commit_notification(&repository, &commit()),
            "New commit on o/n: a1b2c3d Add pokedex command by Ash (<t:1714564800:R>) - https://github.com/o/n/commit/a1b2c3d4e5f6"
        );
    }
}
