//! Notification Use Case
//!
//! The per-site alert feed: newest first, capped at
//! [`NOTIFICATION_LIMIT`](crate::domain::entities::NOTIFICATION_LIMIT).

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    push_notification, unique_timestamp_id, unread_count, Notification, NotificationKind,
};
use crate::domain::ports::SiteStore;
use crate::error::PlantsafeResult;

pub struct NotificationUseCase {
    store: Arc<dyn SiteStore>,
}

impl NotificationUseCase {
    pub fn new(store: Arc<dyn SiteStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> PlantsafeResult<Vec<Notification>> {
        Ok(self.store.list_notifications()?)
    }

    pub fn unread_count(&self) -> PlantsafeResult<usize> {
        Ok(unread_count(&self.store.list_notifications()?))
    }

    /// Mark every entry read; returns how many were unread
    pub fn mark_all_read(&self) -> PlantsafeResult<usize> {
        let mut unread = 0;
        self.store.modify_notifications(Box::new(|feed| {
            unread = unread_count(feed);
            feed.iter_mut().for_each(|n| n.read = true);
            unread > 0
        }))?;
        Ok(unread)
    }

    pub fn push(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> PlantsafeResult<Notification> {
        push(self.store.as_ref(), title.into(), message.into(), kind, now)
    }
}

/// Add an unread entry to the front of the store's feed
pub(crate) fn push(
    store: &dyn SiteStore,
    title: String,
    message: String,
    kind: NotificationKind,
    now: DateTime<Utc>,
) -> PlantsafeResult<Notification> {
    let mut notification = Notification {
        id: String::new(),
        title,
        message,
        kind,
        created_at: now,
        read: false,
    };
    store.modify_notifications(Box::new(|feed| {
        notification.id = unique_timestamp_id("N", now, feed.iter().map(|n| n.id.as_str()));
        push_notification(feed, notification.clone());
        true
    }))?;
    tracing::debug!(id = %notification.id, title = %notification.title, "notification added");
    Ok(notification)
}
