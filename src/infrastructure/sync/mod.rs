//! Sync sink implementations

pub mod outbox;

pub use outbox::OutboxSyncSink;
