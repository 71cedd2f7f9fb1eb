//! bebop - Drive a drone vision computer through its debug bridge.
//!
//! bebop is a small CLI over `adb` that connects to the drone, uploads built
//! binaries to it, and restarts programs on it. All device communication is
//! delegated to the bridge executable; bebop only decides which bridge calls
//! to make.
//!
//! # Modules
//!
//! - [`bridge`] - Bridge invocations and the processes that carry them out
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`session`] - The device operations, as plans of bridge invocations
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use bebop::bridge::RecordingBridge;
//! use bebop::session::{Session, DEFAULT_BIN_DIR, DEFAULT_PROGRAM_PATH};
//!
//! let mut bridge = RecordingBridge::new();
//! Session::new("adb")
//!     .upload("myapp", DEFAULT_BIN_DIR, DEFAULT_PROGRAM_PATH)
//!     .execute(&mut bridge)
//!     .unwrap();
//!
//! assert_eq!(
//!     bridge.invocations()[0].command_line(),
//!     "adb push build/bin/myapp /data/ftp/internal_000/tudelft_vision/myapp"
//! );
//! ```

pub mod bridge;
pub mod cli;
pub mod error;
pub mod session;
pub mod ui;

pub use error::{BebopError, Result};
