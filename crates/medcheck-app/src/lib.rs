//! medcheck-app library root.
//!
//! Re-exports internal modules so that integration tests can drive the
//! session and the config layer without going through the command line.

pub mod commands;
pub mod config;
pub mod render;
pub mod session;
