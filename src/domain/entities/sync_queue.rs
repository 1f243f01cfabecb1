//! Offline sync queue
//!
//! Submissions are committed locally first and queued for delivery to the
//! remote store. Delivery failures are retried on the next drain until an
//! item has failed `max_attempts` times, after which it is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Defect, Notification, Submission};

/// Default number of delivery attempts before an item is abandoned
pub const DEFAULT_MAX_SYNC_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSync {
    pub id: String,
    pub submission: Submission,
    #[serde(default)]
    pub defects: Vec<Defect>,
    pub notification: Option<Notification>,
    pub queued_at: DateTime<Utc>,
    #[serde(default)]
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncQueue {
    items: Vec<PendingSync>,
}

/// Outcome of one drain pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncReport {
    pub synced: usize,
    pub failed: usize,
    pub dropped: usize,
}

impl SyncQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(
        &mut self,
        submission: Submission,
        defects: Vec<Defect>,
        notification: Option<Notification>,
        now: DateTime<Utc>,
    ) {
        self.items.push(PendingSync {
            id: submission.id.clone(),
            submission,
            defects,
            notification,
            queued_at: now,
            attempts: 0,
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[PendingSync] {
        &self.items
    }

    /// Offer every queued item to `push` in queue order.
    ///
    /// Delivered items leave the queue. Failed items stay with their attempt
    /// count raised, unless that count reaches `max_attempts`.
    pub fn drain<E>(
        &mut self,
        max_attempts: u32,
        mut push: impl FnMut(&PendingSync) -> Result<(), E>,
    ) -> SyncReport {
        let mut report = SyncReport::default();
        let mut remaining = Vec::new();

        for mut item in self.items.drain(..) {
            match push(&item) {
                Ok(()) => report.synced += 1,
                Err(_) => {
                    report.failed += 1;
                    item.attempts += 1;
                    if item.attempts < max_attempts {
                        remaining.push(item);
                    } else {
                        report.dropped += 1;
                    }
                }
            }
        }

        self.items = remaining;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FormId;
    use chrono::TimeZone;

    fn submission(id: &str) -> Submission {
        Submission {
            id: id.to_string(),
            plant_id: "PLT-001".to_string(),
            form_id: FormId::GenericPreStart,
            submitted_at: Utc.with_ymd_and_hms(2026, 6, 1, 7, 0, 0).unwrap(),
            submitted_by: None,
            answers: Vec::new(),
            notes: None,
        }
    }

    fn queue_of(ids: &[&str]) -> SyncQueue {
        let mut queue = SyncQueue::new();
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 7, 0, 0).unwrap();
        for id in ids {
            queue.enqueue(submission(id), Vec::new(), None, now);
        }
        queue
    }

    #[test]
    fn successful_items_leave_the_queue() {
        let mut queue = queue_of(&["SUB-1", "SUB-2"]);
        let report = queue.drain(DEFAULT_MAX_SYNC_ATTEMPTS, |_| Ok::<_, ()>(()));
        assert_eq!(report.synced, 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn failures_are_retried_then_dropped() {
        let mut queue = queue_of(&["SUB-1", "SUB-2"]);

        let report = queue.drain(2, |item| {
            if item.id == "SUB-1" {
                Err("offline")
            } else {
                Ok(())
            }
        });
        assert_eq!(report, SyncReport { synced: 1, failed: 1, dropped: 0 });
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.items()[0].attempts, 1);

        let report = queue.drain(2, |_| Err("offline"));
        assert_eq!(report, SyncReport { synced: 0, failed: 1, dropped: 1 });
        assert!(queue.is_empty());
    }

    #[test]
    fn serializes_as_plain_list() {
        let queue = queue_of(&["SUB-1"]);
        let json = serde_json::to_value(&queue).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "SUB-1");
        assert_eq!(json[0]["attempts"], 0);
    }
}
