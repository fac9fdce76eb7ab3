use super::*;

/// Tests the full routing table.
///
/// Expected: every documented name resolves, `pr` aliases `prs`
#[test]
fn resolves_known_commands() {
    let dispatcher = dispatcher(UNREACHABLE_BASE_URL);

    assert_eq!(dispatcher.route("issues"), Some(Route::Issues));
    assert_eq!(dispatcher.route("prs"), Some(Route::PullRequests));
    assert_eq!(dispatcher.route("pr"), Some(Route::PullRequests));
    assert_eq!(dispatcher.route("stats"), Some(Route::RepoStats));
    assert_eq!(dispatcher.route("pokedex"), Some(Route::Pokedex));
    assert_eq!(dispatcher.route("commit"), Some(Route::LatestCommit));
}

/// Tests that command names are case-sensitive.
///
/// Expected: None for differently cased names
#[test]
fn names_are_case_sensitive() {
    let dispatcher = dispatcher(UNREACHABLE_BASE_URL);

    assert_eq!(dispatcher.route("Issues"), None);
    assert_eq!(dispatcher.route("STATS"), None);
}

/// Tests that unknown commands get no reply.
///
/// Expected: None, and no request is attempted
#[tokio::test]
async fn unknown_command_is_silent() {
    let dispatcher = dispatcher(UNREACHABLE_BASE_URL);

    let reply = dispatcher.dispatch(&Command::new("play", "despacito")).await;

    assert_eq!(reply, None);
}

/// Tests that every known command replies even when every upstream is down.
///
/// Expected: Some(apology) for each command, never a panic
#[tokio::test]
async fn known_commands_always_reply() {
    let dispatcher = dispatcher(UNREACHABLE_BASE_URL);

    for (name, expected) in [
        ("issues", "An error occurred while fetching issues."),
        ("prs", "An error occurred while fetching pull requests."),
        ("pr", "An error occurred while fetching pull requests."),
        ("stats", "An error occurred while fetching repository statistics."),
        ("pokedex", format::POKEDEX_USAGE),
        ("commit", "An error occurred while fetching the latest commit."),
    ] {
        let reply = dispatcher.dispatch(&Command::new(name, "")).await;
        assert_eq!(reply.as_deref(), Some(expected), "command {}", name);
    }

    let reply = dispatcher.dispatch(&Command::new("pokedex", " pikachu")).await;
    assert_eq!(
        reply.as_deref(),
        Some("An error occurred while fetching Pokémon data.")
    );
}
