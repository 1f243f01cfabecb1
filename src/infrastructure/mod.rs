//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Site store implementations (JSON files, in-memory)
//! - `sync/` - Sync sink implementations (outbox directory)
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod repositories;
pub mod sync;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use repositories::{InMemorySiteStore, JsonSiteStore};
pub use sync::OutboxSyncSink;
