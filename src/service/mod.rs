//! Service layer: external API adapters and the logic built on them.
//!
//! - `github` - GitHub repository adapter (issues, pulls, stats, commits)
//! - `pokeapi` - PokéAPI species adapter
//! - `dispatch` - Routes chat commands to adapters and formats replies
//! - `notifier` - Polls for new commits and announces them

pub mod dispatch;
pub mod github;
pub mod notifier;
pub mod pokeapi;
