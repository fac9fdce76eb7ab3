//! Domain models shared by the adapters, the dispatcher and the notifier.
//!
//! - `command` - Chat command parsed from a prefixed message
//! - `github` - Repository coordinates and GitHub REST records
//! - `pokemon` - PokéAPI species record

pub mod command;
pub mod github;
pub mod pokemon;
