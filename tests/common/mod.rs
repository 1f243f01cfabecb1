//! Common test utilities for plantsafe CLI tests.
//!
//! - `TestEnv`: isolated data directory, home and frozen clock
//! - `TestResult`: captured output of one invocation

#![allow(dead_code)]

pub mod env;

pub use env::*;
