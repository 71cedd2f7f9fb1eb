//! The `bebop run` command.
//!
//! Restarts a program on the device: keepalive, kill any running instance,
//! then launch from the program directory. Only the launch counts towards
//! the exit status.

use crate::bridge::Bridge;
use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::session::Session;
use crate::ui::UserInterface;

use super::dispatcher::{execute_plan, Command, CommandResult, ExitPolicy};

/// The run command implementation.
pub struct RunCommand<'a> {
    session: &'a Session,
    policy: ExitPolicy,
    args: RunArgs,
}

impl<'a> RunCommand<'a> {
    /// Create a new run command.
    pub fn new(session: &'a Session, policy: ExitPolicy, args: RunArgs) -> Self {
        Self {
            session,
            policy,
            args,
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(
        &self,
        bridge: &mut dyn Bridge,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let plan = self.session.run(&self.args.program, &self.args.path);
        tracing::debug!("Run script:\n{}", plan.script());

        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "Restarting {} in {}",
                self.args.program, self.args.path
            ));
        }

        execute_plan(&plan, self.policy, bridge, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::RecordingBridge;
    use crate::session::DEFAULT_PROGRAM_PATH;
    use crate::ui::{MockUI, OutputMode};

    fn args(program: &str) -> RunArgs {
        RunArgs {
            program: program.to_string(),
            path: DEFAULT_PROGRAM_PATH.to_string(),
        }
    }

    #[test]
    fn issues_three_shell_calls_in_order() {
        let session = Session::new("adb");
        let cmd = RunCommand::new(&session, ExitPolicy::Lenient, args("myapp"));
        let mut bridge = RecordingBridge::new();
        let mut ui = MockUI::new();

        cmd.execute(&mut bridge, &mut ui).unwrap();

        let calls = bridge.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], ["shell", "kk"]);
        assert_eq!(calls[1], ["shell", "killall", "-9", "myapp"]);
        assert_eq!(
            calls[2],
            ["shell", "(cd /data/ftp/internal_000/tudelft_vision/ && ./myapp)"]
        );
    }

    #[test]
    fn kill_failure_is_silent_even_when_strict() {
        let session = Session::new("adb");
        let cmd = RunCommand::new(&session, ExitPolicy::Strict, args("myapp"));
        let mut bridge = RecordingBridge::new();
        bridge.fail_when("killall", Some(1));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut bridge, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(bridge.invocations().len(), 3);
        assert!(ui.warnings().is_empty());
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn launch_failure_is_reported_when_strict() {
        let session = Session::new("adb");
        let cmd = RunCommand::new(&session, ExitPolicy::Strict, args("myapp"));
        let mut bridge = RecordingBridge::new();
        bridge.fail_when(
            "(cd /data/ftp/internal_000/tudelft_vision/ && ./myapp)",
            Some(126),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut bridge, &mut ui).unwrap();

        assert_eq!(result.exit_code, 126);
        assert!(ui.has_error("./myapp"));
    }

    #[test]
    fn verbose_mode_announces_restart() {
        let session = Session::new("adb");
        let cmd = RunCommand::new(&session, ExitPolicy::Lenient, args("myapp"));
        let mut bridge = RecordingBridge::new();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut bridge, &mut ui).unwrap();

        assert!(ui.messages()[0].contains("Restarting myapp"));
    }
}
