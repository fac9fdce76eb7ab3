//! DexIndex Bot Test Utils
//!
//! Provides shared testing utilities for the bot's adapter, dispatcher and notifier
//! tests. This crate offers a builder pattern for standing up a local mock HTTP
//! server that plays the role of the GitHub and PokéAPI REST endpoints.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder registering canned responses per path
//! - **TestContext**: Running mock server plus the registered mocks, and a
//!   `SilentServer` that never answers for timeout tests
//! - **fixture**: JSON payload builders shaped like the real upstream responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn lists_issues() {
//!     let test = TestBuilder::new()
//!         .with_json(
//!             "/repos/owner/name/issues",
//!             200,
//!             fixture::github::issues(&[(1, "First")]),
//!         )
//!         .build()
//!         .await;
//!
//!     let base_url = test.url();
//!     // Point an adapter at base_url...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod fixture;
