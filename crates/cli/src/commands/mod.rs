//! Command handlers for the docquest CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod ask;
pub mod chunks;
pub mod config;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use chunks::ChunksCommand;
pub use config::ConfigCommand;
