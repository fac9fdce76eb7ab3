use std::{sync::Arc, time::Duration};

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    bot::sink::ReplySink,
    error::AppError,
    service::notifier::{CommitNotifier, TickOutcome},
};

/// Starts the commit notification scheduler
///
/// Registers a repeated job that runs one notifier tick every `interval`. The
/// job fires on schedule regardless of how the previous tick ended; a tick that
/// fires while the previous one is still polling is dropped by the notifier.
///
/// # Arguments
/// - `notifier`: Shared notifier holding the last seen commit
/// - `interval`: Time between ticks
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for the process lifetime
/// - `Err(AppError::SchedulerErr)` - Job could not be registered or started
pub async fn start_scheduler<S>(
    notifier: Arc<CommitNotifier<S>>,
    interval: Duration,
) -> Result<JobScheduler, AppError>
where
    S: ReplySink + 'static,
{
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let notifier = notifier.clone();

        Box::pin(async move {
            match notifier.tick().await {
                TickOutcome::Notified(sha) => tracing::debug!("Commit tick notified {}", sha),
                TickOutcome::Unchanged => tracing::debug!("Commit tick found nothing new"),
                TickOutcome::Failed => tracing::debug!("Commit tick failed, waiting for next"),
                TickOutcome::Skipped => tracing::debug!("Commit tick skipped"),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Commit notification scheduler started, polling every {}s",
        interval.as_secs()
    );

    Ok(scheduler)
}
