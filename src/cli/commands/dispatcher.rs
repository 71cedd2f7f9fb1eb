//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::bridge::{Bridge, DryRunBridge, ProcessBridge};
use crate::cli::args::{Cli, Commands};
use crate::error::{BebopError, Result};
use crate::session::{Plan, Session};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `bridge` - Where bridge invocations are sent
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(
        &self,
        bridge: &mut dyn Bridge,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// How bridge failures turn into the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Always exit 0 once the bridge has run, whatever it returned.
    #[default]
    Lenient,
    /// Exit with the status of the failing bridge call.
    Strict,
}

impl ExitPolicy {
    /// Pick the policy from the global `--strict` flag.
    pub fn from_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Run `plan` through `bridge` and report it according to `policy`.
///
/// Shared by every device command.
pub fn execute_plan(
    plan: &Plan,
    policy: ExitPolicy,
    bridge: &mut dyn Bridge,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let report = plan.execute(bridge)?;

    for step in report.steps.iter().filter(|step| step.outcome.success) {
        ui.finished(&step.command, step.outcome.duration);
    }

    let Some(failure) = report.failure() else {
        return Ok(CommandResult::success());
    };

    let err = BebopError::CommandFailed {
        command: failure.command.clone(),
        code: failure.outcome.exit_code,
    };

    match policy {
        ExitPolicy::Lenient => {
            ui.warning(&err.to_string());
            Ok(CommandResult::success())
        }
        ExitPolicy::Strict => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(failure.outcome.status_code()))
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    session: Session,
    policy: ExitPolicy,
    dry_run: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher from the global CLI flags.
    pub fn new(cli: &Cli) -> Self {
        Self {
            session: Session::new(cli.adb.clone()),
            policy: ExitPolicy::from_flag(cli.strict),
            dry_run: cli.dry_run,
        }
    }

    /// The session used to build bridge invocations.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The exit policy in effect.
    pub fn policy(&self) -> ExitPolicy {
        self.policy
    }

    /// Bridge matching the `--dry-run` flag.
    fn bridge(&self) -> Box<dyn Bridge> {
        if self.dry_run {
            tracing::debug!("Dry run: printing bridge commands instead of running them");
            Box::new(DryRunBridge::stdout())
        } else {
            Box::new(ProcessBridge::new())
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut bridge = self.bridge();
        self.dispatch_with(cli, bridge.as_mut(), ui)
    }

    /// Dispatch using an explicit bridge.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        bridge: &mut dyn Bridge,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match &cli.command {
            Commands::Connect(args) => {
                let cmd =
                    super::connect::ConnectCommand::new(&self.session, self.policy, args.clone());
                cmd.execute(bridge, ui)
            }
            Commands::Upload(args) => {
                let cmd =
                    super::upload::UploadCommand::new(&self.session, self.policy, args.clone());
                cmd.execute(bridge, ui)
            }
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(&self.session, self.policy, args.clone());
                cmd.execute(bridge, ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(bridge, ui)
            }
        }
    }
}
