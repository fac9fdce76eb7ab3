//! GitHub REST fixtures.

use serde_json::{json, Value};

/// Default owner used by fixture URLs.
pub const DEFAULT_OWNER: &str = "DexIndex0";

/// Default repository name used by fixture URLs.
pub const DEFAULT_REPO: &str = "DexIndex0";

/// Path of the issues collection for the default repository.
pub fn issues_path() -> String {
    format!("/repos/{}/{}/issues", DEFAULT_OWNER, DEFAULT_REPO)
}

/// Path of the pulls collection for the default repository.
pub fn pulls_path() -> String {
    format!("/repos/{}/{}/pulls", DEFAULT_OWNER, DEFAULT_REPO)
}

/// Path of the repository metadata for the default repository.
pub fn repo_path() -> String {
    format!("/repos/{}/{}", DEFAULT_OWNER, DEFAULT_REPO)
}

/// Path of the commits collection for the default repository.
pub fn commits_path() -> String {
    format!("/repos/{}/{}/commits", DEFAULT_OWNER, DEFAULT_REPO)
}

/// Web URL of an issue in the default repository.
pub fn issue_url(number: u64) -> String {
    format!(
        "https://github.com/{}/{}/issues/{}",
        DEFAULT_OWNER, DEFAULT_REPO, number
    )
}

/// Web URL of a pull request in the default repository.
pub fn pull_url(number: u64) -> String {
    format!(
        "https://github.com/{}/{}/pull/{}",
        DEFAULT_OWNER, DEFAULT_REPO, number
    )
}

/// Creates an issue entry as listed by `GET /repos/{owner}/{repo}/issues`.
pub fn issue(number: u64, title: &str) -> Value {
    json!({
        "id": 1000 + number,
        "number": number,
        "title": title,
        "state": "open",
        "html_url": issue_url(number),
        "user": { "login": "octocat", "id": 1 },
        "labels": [],
        "comments": 0,
        "created_at": "2024-05-01T12:00:00Z"
    })
}

/// Creates a pull request as it appears in the issues collection.
///
/// GitHub marks these with a `pull_request` object.
pub fn issue_for_pull(number: u64, title: &str) -> Value {
    let mut value = issue(number, title);
    value["html_url"] = json!(pull_url(number));
    value["pull_request"] = json!({
        "url": format!(
            "https://api.github.com/repos/{}/{}/pulls/{}",
            DEFAULT_OWNER, DEFAULT_REPO, number
        ),
        "html_url": pull_url(number)
    });
    value
}

/// Creates an issues collection from `(number, title)` pairs.
pub fn issues(entries: &[(u64, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(number, title)| issue(*number, title))
            .collect(),
    )
}

/// Creates a pull request entry as listed by `GET /repos/{owner}/{repo}/pulls`.
pub fn pull_request(number: u64, title: &str) -> Value {
    json!({
        "id": 2000 + number,
        "number": number,
        "title": title,
        "state": "open",
        "html_url": pull_url(number),
        "draft": false,
        "user": { "login": "octocat", "id": 1 },
        "head": { "ref": format!("feature-{}", number) },
        "base": { "ref": "main" }
    })
}

/// Creates a pulls collection from `(number, title)` pairs.
pub fn pull_requests(entries: &[(u64, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(number, title)| pull_request(*number, title))
            .collect(),
    )
}

/// Creates repository metadata as returned by `GET /repos/{owner}/{repo}`.
pub fn repository(name: &str, stars: u64, forks: u64) -> Value {
    json!({
        "id": 42,
        "name": name,
        "full_name": format!("{}/{}", DEFAULT_OWNER, name),
        "private": false,
        "html_url": format!("https://github.com/{}/{}", DEFAULT_OWNER, name),
        "description": "Pokédex index",
        "stargazers_count": stars,
        "watchers_count": stars,
        "forks_count": forks,
        "open_issues_count": 0,
        "default_branch": "main"
    })
}

/// Creates a commit entry as listed by `GET /repos/{owner}/{repo}/commits`.
pub fn commit(sha: &str, message: &str) -> Value {
    json!({
        "sha": sha,
        "node_id": "C_kwDOAAAAAA",
        "html_url": format!(
            "https://github.com/{}/{}/commit/{}",
            DEFAULT_OWNER, DEFAULT_REPO, sha
        ),
        "commit": {
            "message": message,
            "author": {
                "name": "Ash Ketchum",
                "email": "ash@example.com",
                "date": "2024-05-01T12:00:00Z"
            },
            "committer": {
                "name": "GitHub",
                "email": "noreply@github.com",
                "date": "2024-05-01T12:00:00Z"
            }
        },
        "author": { "login": "ash", "id": 7 },
        "parents": []
    })
}

/// Creates a commits collection, newest first.
pub fn commits(entries: &[(&str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(sha, message)| commit(sha, message))
            .collect(),
    )
}
