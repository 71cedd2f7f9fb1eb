//! The `bebop upload` command.

use crate::bridge::Bridge;
use crate::cli::args::UploadArgs;
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

use super::dispatcher::{execute_plan, Command, CommandResult, ExitPolicy};

/// The upload command implementation.
pub struct UploadCommand<'a> {
    session: &'a Session,
    policy: ExitPolicy,
    args: UploadArgs,
}

impl<'a> UploadCommand<'a> {
    /// Create a new upload command.
    pub fn new(session: &'a Session, policy: ExitPolicy, args: UploadArgs) -> Self {
        Self {
            session,
            policy,
            args,
        }
    }
}

impl Command for UploadCommand<'_> {
    fn execute(
        &self,
        bridge: &mut dyn Bridge,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let plan = self
            .session
            .upload(&self.args.program, &self.args.bin, &self.args.path);
        execute_plan(&plan, self.policy, bridge, ui)
    }
}
