//! Command dispatcher.
//!
//! Maps a parsed chat command to one adapter call and renders the result as the
//! reply text. The routing table is built once when the dispatcher is created.
//! Unknown command names produce no reply at all, matching the usual prefix-command
//! convention; every known command always produces a reply, including on failure.

pub mod format;

use std::collections::HashMap;

use crate::{
    model::command::Command,
    service::{github::GitHubService, pokeapi::PokeApiService},
};

/// Adapter call a command name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Issues,
    PullRequests,
    RepoStats,
    Pokedex,
    LatestCommit,
}

/// Command names and their routes. Names are matched case-sensitively.
///
/// `prs` is the canonical pull request command; `pr` is kept as an alias.
const ROUTES: [(&str, Route); 6] = [
    ("issues", Route::Issues),
    ("prs", Route::PullRequests),
    ("pr", Route::PullRequests),
    ("stats", Route::RepoStats),
    ("pokedex", Route::Pokedex),
    ("commit", Route::LatestCommit),
];

/// Routes chat commands to the GitHub and PokéAPI adapters.
pub struct Dispatcher {
    github: GitHubService,
    pokeapi: PokeApiService,
    routes: HashMap<&'static str, Route>,
}

impl Dispatcher {
    /// Creates a new Dispatcher with the full routing table.
    ///
    /// # Arguments
    /// - `github` - Adapter for the tracked repository
    /// - `pokeapi` - Adapter for species lookups
    ///
    /// # Returns
    /// - `Dispatcher` - Ready to route commands
    pub fn new(github: GitHubService, pokeapi: PokeApiService) -> Self {
        Self {
            github,
            pokeapi,
            routes: ROUTES.into_iter().collect(),
        }
    }

    /// Resolves a command name to its route.
    pub fn route(&self, name: &str) -> Option<Route> {
        self.routes.get(name).copied()
    }

    /// Handles one command.
    ///
    /// # Arguments
    /// - `command` - Parsed command with raw arguments
    ///
    /// # Returns
    /// - `Some(String)` - Reply to send, for every known command
    /// - `None` - Unknown command; the bot stays silent
    pub async fn dispatch(&self, command: &Command) -> Option<String> {
        let Some(route) = self.route(&command.name) else {
            tracing::debug!("Ignoring unknown command '{}'", command.name);
            return None;
        };

        tracing::debug!("Dispatching '{}' to {:?}", command.name, route);

        let reply = match route {
            Route::Issues => format::issues(self.github.fetch_issues().await),
            Route::PullRequests => format::pull_requests(self.github.fetch_pull_requests().await),
            Route::RepoStats => format::repo_stats(self.github.fetch_repo_stats().await),
            Route::Pokedex => {
                let query = command.args.trim();
                format::species(query, self.pokeapi.fetch_species(query).await)
            }
            Route::LatestCommit => format::latest_commit(self.github.fetch_latest_commit().await),
        };

        Some(reply)
    }
}

#[cfg(test)]
mod test;
