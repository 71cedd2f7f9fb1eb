//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Device commands build a
//! [`Plan`](crate::session::Plan) and hand it to [`execute_plan`] together
//! with the bridge selected by the global flags.

pub mod completions;
pub mod connect;
pub mod dispatcher;
pub mod run;
pub mod upload;

pub use dispatcher::{execute_plan, Command, CommandDispatcher, CommandResult, ExitPolicy};
