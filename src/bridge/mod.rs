//! Calls into the external device-bridge tool.
//!
//! All device communication is delegated to the bridge executable (`adb`).
//! This module describes those calls as [`Invocation`] values and runs them
//! through a [`Bridge`].

pub mod invocation;
pub mod mock;
pub mod quote;
pub mod runner;

pub use invocation::{Invocation, InvocationOutcome};
pub use mock::RecordingBridge;
pub use runner::{Bridge, DryRunBridge, ProcessBridge};

/// Bridge executable used when none is configured.
pub const DEFAULT_BRIDGE: &str = "adb";
