//! The `bebop connect` command.

use crate::bridge::Bridge;
use crate::cli::args::ConnectArgs;
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

use super::dispatcher::{execute_plan, Command, CommandResult, ExitPolicy};

/// The connect command implementation.
pub struct ConnectCommand<'a> {
    session: &'a Session,
    policy: ExitPolicy,
    args: ConnectArgs,
}

impl<'a> ConnectCommand<'a> {
    /// Create a new connect command.
    pub fn new(session: &'a Session, policy: ExitPolicy, args: ConnectArgs) -> Self {
        Self {
            session,
            policy,
            args,
        }
    }
}

impl Command for ConnectCommand<'_> {
    fn execute(
        &self,
        bridge: &mut dyn Bridge,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let plan = self.session.connect(&self.args.ip, self.args.port);
        execute_plan(&plan, self.policy, bridge, ui)
    }
}
