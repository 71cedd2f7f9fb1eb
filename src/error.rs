//! Error types for bebop operations.
//!
//! This module defines [`BebopError`], the error type used throughout the
//! application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A bridge process that starts and exits non-zero is *not* an error; it is
//!   reported as an [`InvocationOutcome`](crate::bridge::InvocationOutcome)
//!   and rendered through [`BebopError::CommandFailed`] as a warning, or as
//!   the failure under `--strict`
//! - A bridge process that cannot be started at all is always an error

use thiserror::Error;

/// Core error type for bebop operations.
#[derive(Debug, Error)]
pub enum BebopError {
    /// The bridge executable could not be started.
    #[error("Could not start '{program}': {source}")]
    BridgeUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A bridge command exited unsuccessfully.
    #[error("Command failed with {}: {command}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// `exit code N`, or `a signal` when the process never exited.
fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "a signal".to_string(),
    }
}

/// Result type alias for bebop operations.
pub type Result<T> = std::result::Result<T, BebopError>;
