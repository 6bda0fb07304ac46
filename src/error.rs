//! Error types for packager operations.
//!
//! This module defines [`PackagerError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Tool probe failures are returned as `PackagerError` and recovered by
//!   the advisor, which prints them and keeps going
//! - Console I/O failures propagate to `main` and end the process

use thiserror::Error;

/// Core error type for packager operations.
#[derive(Debug, Error)]
pub enum PackagerError {
    /// Shell command ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Shell command could not be started.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// Command output was not valid UTF-8.
    #[error("Output of '{command}' is not valid UTF-8")]
    OutputDecode { command: String },

    /// The running executable's location could not be resolved.
    #[error("Cannot locate the running executable: {message}")]
    ExecutableLocation { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for packager operations.
pub type Result<T> = std::result::Result<T, PackagerError>;
