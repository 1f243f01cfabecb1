//! Domain Layer
//!
//! The inspection register's business rules, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - Register records (Plant, StaticSafetyRecord, LiftingItem, Submission)
//! - `value_objects/` - Closed vocabularies (FormId, ColourCode, Severity, Role)
//! - `services/` - Date math, colour rule and the compliance engine
//! - `policies/` - Access and PIN rules
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or the clock directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
