//! Domain Entities
//!
//! Records with identity and lifecycle:
//! - `Plant` - equipment needing daily and weekly checks
//! - `StaticSafetyRecord` - the GA1 registration file, one per plant
//! - `LiftingItem` - lifting gear register entry with a colour tag
//! - `Submission` - a completed checklist
//! - `Issue` - derived compliance finding (never persisted)

mod defect;
mod form_template;
mod issue;
mod lifting_item;
mod notification;
mod plant;
mod session;
mod static_record;
mod submission;
mod sync_queue;

pub use defect::{Defect, DefectStatus};
pub use form_template::{FormSection, FormTemplate};
pub use issue::{Issue, IssueKind, IssueSummary};
pub use lifting_item::{LiftingItem, LiftingItemUpdate, NewLiftingItem};
pub use notification::{push_notification, unread_count, Notification, NotificationKind, NOTIFICATION_LIMIT};
pub use plant::{
    carry_forward_inspections, next_sequential_id, NewPlant, OutOfService, Plant, PlantUpdate,
};
pub use session::{Session, Site};
pub use static_record::{upsert_static_record, StaticSafetyRecord};
pub use submission::{unique_timestamp_id, AnswerResult, ChecklistAnswer, Submission};
pub use sync_queue::{PendingSync, SyncQueue, SyncReport, DEFAULT_MAX_SYNC_ATTEMPTS};
