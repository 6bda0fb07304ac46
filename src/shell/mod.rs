//! Shell command execution for tool version probes.

pub mod command;

pub use command::{execute, query_version, CommandResult};
