//! Commit notifier.
//!
//! Polls the tracked repository for its newest commit and announces it when the
//! commit differs from the last one seen. Each tick runs under a single-flight
//! guard: a tick that fires while the previous one is still polling is dropped,
//! not queued. The last seen commit lives in process memory only and is replaced
//! only after a successful poll and send.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::{bot::sink::ReplySink, service::dispatch::format, service::github::GitHubService};

/// Guarantees at most one poll is in flight.
///
/// `false` is IDLE, `true` is POLLING.
#[derive(Debug, Default)]
pub struct SingleFlight {
    in_flight: AtomicBool,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves IDLE to POLLING.
    ///
    /// # Returns
    /// - `Some(FlightGuard)` - Acquired; dropping the guard moves back to IDLE
    /// - `None` - Another poll is already in flight
    pub fn try_acquire(&self) -> Option<FlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightGuard {
                in_flight: &self.in_flight,
            })
    }

    #[cfg(test)]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one poll. Releases the flight on drop, on every path.
#[derive(Debug)]
pub struct FlightGuard<'a> {
    in_flight: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new commit was announced; carries its sha.
    Notified(String),
    /// Newest commit is the one already seen.
    Unchanged,
    /// Poll or send failed; state untouched.
    Failed,
    /// Previous tick still in flight; this one was dropped.
    Skipped,
}

/// Announces new commits on the tracked repository.
pub struct CommitNotifier<S> {
    github: GitHubService,
    sink: S,
    last_seen: RwLock<Option<String>>,
    flight: SingleFlight,
}

impl<S: ReplySink> CommitNotifier<S> {
    /// Creates a new CommitNotifier with no commit seen yet.
    ///
    /// # Arguments
    /// - `github` - Adapter for the tracked repository
    /// - `sink` - Where notifications are sent
    ///
    /// # Returns
    /// - `CommitNotifier` - Idle notifier
    pub fn new(github: GitHubService, sink: S) -> Self {
        Self {
            github,
            sink,
            last_seen: RwLock::new(None),
            flight: SingleFlight::new(),
        }
    }

    /// Sha of the last announced commit, if any.
    #[cfg(test)]
    pub async fn last_seen(&self) -> Option<String> {
        self.last_seen.read().await.clone()
    }

    #[cfg(test)]
    pub fn is_polling(&self) -> bool {
        self.flight.is_in_flight()
    }

    /// Runs one poll.
    ///
    /// Failures are logged and end the tick; there is no retry within a tick and
    /// no backoff between ticks.
    ///
    /// # Returns
    /// - `TickOutcome` - What happened; never an error
    pub async fn tick(&self) -> TickOutcome {
        let Some(_guard) = self.flight.try_acquire() else {
            tracing::warn!("Commit poll still in flight, dropping tick");
            return TickOutcome::Skipped;
        };

        let commit = match self.github.fetch_latest_commit().await {
            Ok(commit) => commit,
            Err(e) => {
                tracing::error!(kind = e.kind(), "Failed to poll latest commit: {}", e);
                return TickOutcome::Failed;
            }
        };

        if self.last_seen.read().await.as_deref() == Some(commit.sha.as_str()) {
            tracing::debug!("No new commit since {}", commit.short_sha());
            return TickOutcome::Unchanged;
        }

        let message = format::commit_notification(self.github.repository(), &commit);
        if let Err(e) = self.sink.send(&message).await {
            tracing::error!(
                "Failed to send notification for commit {}: {}",
                commit.short_sha(),
                e
            );
            return TickOutcome::Failed;
        }

        tracing::info!(
            "Announced commit {} on {}",
            commit.short_sha(),
            self.github.repository()
        );

        *self.last_seen.write().await = Some(commit.sha.clone());

        TickOutcome::Notified(commit.sha)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serenity::async_trait;
    use test_utils::{
        builder::TestBuilder,
        context::UNREACHABLE_BASE_URL,
        fixture::{self, github::{DEFAULT_OWNER, DEFAULT_REPO}},
    };
    use url::Url;

    use super::*;
    use crate::{error::AppError, model::github::RepositoryCoordinates};

    /// Records every message instead of sending it. Rejects sends while `failing` is set.
    #[derive(Clone, Default)]
    struct RecordingSink {
        sent: Arc<Mutex<Vec<String>>>,
        failing: Arc<AtomicBool>,
    }

    impl RecordingSink {
        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn send(&self, text: &str) -> Result<(), AppError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(serenity::Error::Other("channel unavailable").into());
            }

            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn notifier(base_url: &str, sink: RecordingSink) -> CommitNotifier<RecordingSink> {
        let github = GitHubService::new(
            reqwest::Client::new(),
            Url::parse(base_url).unwrap(),
            RepositoryCoordinates::new(DEFAULT_OWNER, DEFAULT_REPO),
            None,
        );

        CommitNotifier::new(github, sink)
    }

    async fn commits_server(sha: &str) -> test_utils::context::TestContext {
        TestBuilder::new()
            .with_json(
                &fixture::github::commits_path(),
                200,
                fixture::github::commits(&[(sha, "Add pokedex command")]),
            )
            .build()
            .await
    }

    #[test]
    fn single_flight_allows_one_holder() {
        let flight = SingleFlight::new();

        let guard = flight.try_acquire();
        assert!(guard.is_some());
        assert!(flight.is_in_flight());
        assert!(flight.try_acquire().is_none());

        drop(guard);
        assert!(!flight.is_in_flight());
        assert!(flight.try_acquire().is_some());
    }

    /// Tests the first tick after startup.
    ///
    /// Expected: Notified, message sent, last_seen set
    #[tokio::test]
    async fn first_commit_is_announced() {
        let test = commits_server("a1b2c3d4e5f6").await;
        let sink = RecordingSink::default();
        let notifier = notifier(&test.url(), sink.clone());

        let outcome = notifier.tick().await;

        assert_eq!(outcome, TickOutcome::Notified("a1b2c3d4e5f6".to_string()));
        assert_eq!(notifier.last_seen().await.as_deref(), Some("a1b2c3d4e5f6"));
        let sent = sink.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("New commit on DexIndex0/DexIndex0: a1b2c3d Add pokedex command"));
    }

    /// Tests two ticks seeing the same commit.
    ///
    /// Expected: exactly one notification in total
    #[tokio::test]
    async fn identical_commit_is_announced_once() {
        let test = commits_server("a1b2c3d4e5f6").await;
        let sink = RecordingSink::default();
        let notifier = notifier(&test.url(), sink.clone());

        let first = notifier.tick().await;
        let second = notifier.tick().await;

        assert!(matches!(first, TickOutcome::Notified(_)));
        assert_eq!(second, TickOutcome::Unchanged);
        assert_eq!(sink.sent().len(), 1);
        assert!(!notifier.is_polling());
    }

    /// Tests a new commit after one was already seen.
    ///
    /// Expected: a second notification and last_seen replaced
    #[tokio::test]
    async fn new_commit_replaces_last_seen() {
        let sink = RecordingSink::default();

        let first = commits_server("1111111111").await;
        let notifier = notifier(&first.url(), sink.clone());
        notifier.tick().await;

        let second = commits_server("2222222222").await;
        let notifier = CommitNotifier {
            github: GitHubService::new(
                reqwest::Client::new(),
                Url::parse(&second.url()).unwrap(),
                RepositoryCoordinates::new(DEFAULT_OWNER, DEFAULT_REPO),
                None,
            ),
            ..notifier
        };

        let outcome = notifier.tick().await;

        assert_eq!(outcome, TickOutcome::Notified("2222222222".to_string()));
        assert_eq!(notifier.last_seen().await.as_deref(), Some("2222222222"));
        assert_eq!(sink.sent().len(), 2);
    }

    /// Tests a tick whose poll fails at the transport level.
    ///
    /// Expected: Failed, last_seen unchanged, flight released, later ticks still run
    #[tokio::test]
    async fn failed_tick_keeps_state() {
        let sink = RecordingSink::default();
        let notifier = notifier(UNREACHABLE_BASE_URL, sink.clone());
        *notifier.last_seen.write().await = Some("a1b2c3d4e5f6".to_string());

        assert_eq!(notifier.tick().await, TickOutcome::Failed);
        assert_eq!(notifier.tick().await, TickOutcome::Failed);

        assert_eq!(notifier.last_seen().await.as_deref(), Some("a1b2c3d4e5f6"));
        assert!(!notifier.is_polling());
        assert!(sink.sent().is_empty());
    }

    /// Tests a tick whose notification cannot be delivered.
    ///
    /// Expected: Failed with last_seen untouched, then the next tick delivers it
    #[tokio::test]
    async fn failed_send_is_retried_next_tick() {
        let test = commits_server("a1b2c3d4e5f6").await;
        let sink = RecordingSink::default();
        let notifier = notifier(&test.url(), sink.clone());

        sink.set_failing(true);
        let outcome = notifier.tick().await;

        assert_eq!(outcome, TickOutcome::Failed);
        assert_eq!(notifier.last_seen().await, None);
        assert!(!notifier.is_polling());
        assert!(sink.sent().is_empty());

        sink.set_failing(false);
        let outcome = notifier.tick().await;

        assert_eq!(outcome, TickOutcome::Notified("a1b2c3d4e5f6".to_string()));
        assert_eq!(notifier.last_seen().await.as_deref(), Some("a1b2c3d4e5f6"));
        assert_eq!(sink.sent().len(), 1);
    }

    /// Tests a tick against an empty repository.
    ///
    /// Expected: Failed with nothing sent
    #[tokio::test]
    async fn empty_history_is_skipped() {
        let test = TestBuilder::new()
            .with_json(&fixture::github::commits_path(), 200, fixture::github::commits(&[]))
            .build()
            .await;
        let sink = RecordingSink::default();
        let notifier = notifier(&test.url(), sink.clone());

        assert_eq!(notifier.tick().await, TickOutcome::Failed);
        assert_eq!(notifier.last_seen().await, None);
        assert!(sink.sent().is_empty());
    }

    /// Tests a tick firing while another poll holds the flight.
    ///
    /// Expected: Skipped without any request
    #[tokio::test]
    async fn overlapping_tick_is_dropped() {
        let test = TestBuilder::new()
            .with_json(
                &fixture::github::commits_path(),
                200,
                fixture::github::commits(&[("a1b2c3d4e5f6", "msg")]),
            )
            .expect_hits(0)
            .build()
            .await;
        let sink = RecordingSink::default();
        let notifier = notifier(&test.url(), sink.clone());

        let guard = notifier.flight.try_acquire();
        assert!(guard.is_some());

        assert_eq!(notifier.tick().await, TickOutcome::Skipped);
        assert!(sink.sent().is_empty());
        test.assert_hits().await;
    }
}
