//! Test fixtures providing upstream JSON payloads.
//!
//! This module contains fixture functions that build `serde_json::Value` payloads
//! shaped like real GitHub and PokéAPI responses, including fields the bot does not
//! read, so decoders are exercised against realistic bodies.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let body = fixture::pokeapi::pokemon("pikachu", 4, 60);
//! ```

pub mod github;
pub mod pokeapi;
