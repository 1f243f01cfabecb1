//! Persisted alerts shown in the notification feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The feed keeps at most this many entries, newest first.
pub const NOTIFICATION_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Push `notification` to the front of the feed, dropping the oldest entries
/// beyond [`NOTIFICATION_LIMIT`].
pub fn push_notification(feed: &mut Vec<Notification>, notification: Notification) {
    feed.insert(0, notification);
    feed.truncate(NOTIFICATION_LIMIT);
}

pub fn unread_count(feed: &[Notification]) -> usize {
    feed.iter().filter(|n| !n.read).count()
}
