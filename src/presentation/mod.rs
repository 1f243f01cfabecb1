//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - JSON event envelopes
//!
//! ## Usage
//!
//! ```ignore
//! use plantsafe::presentation::AppContext;
//!
//! let app = AppContext::from_config(config);
//! let report = app.compliance().report(app.now())?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::AppContext;
