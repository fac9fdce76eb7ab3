//! Recurring jobs driven by `tokio-cron-scheduler`.

pub mod commit_notifications;
