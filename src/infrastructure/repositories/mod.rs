//! Repository implementations

pub mod in_memory;
pub mod json_site_store;

pub use in_memory::InMemorySiteStore;
pub use json_site_store::JsonSiteStore;
