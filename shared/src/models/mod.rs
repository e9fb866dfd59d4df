//! Data models
//!
//! Shared between the client, the mock backend and the CLI.
//! Wire format is JSON with camelCase keys; optional values are omitted
//! when absent.

pub mod cafe;
pub mod date;
pub mod employee;

// Re-exports
pub use cafe::*;
pub use employee::*;
