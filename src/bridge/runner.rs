//! Running invocations.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{BebopError, Result};

use super::{Invocation, InvocationOutcome};

/// Something that can carry out bridge invocations.
///
/// The real implementation spawns processes; alternatives print or record
/// invocations so commands can be previewed and tested.
pub trait Bridge {
    /// Run one invocation to completion.
    ///
    /// A process that starts and exits non-zero is reported through the
    /// outcome, not as an error.
    fn invoke(&mut self, invocation: &Invocation) -> Result<InvocationOutcome>;
}

/// Spawns the bridge executable and waits for it.
///
/// Standard streams are inherited, so whatever the bridge prints reaches the
/// user directly.
#[derive(Debug, Default)]
pub struct ProcessBridge;

impl ProcessBridge {
    /// Create a process bridge.
    pub fn new() -> Self {
        Self
    }
}

impl Bridge for ProcessBridge {
    fn invoke(&mut self, invocation: &Invocation) -> Result<InvocationOutcome> {
        tracing::debug!("Executing: {}", invocation);
        let start = Instant::now();

        let status = Command::new(invocation.program())
            .args(invocation.arguments())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| BebopError::BridgeUnavailable {
                program: invocation.program().to_string(),
                source,
            })?;

        let duration = start.elapsed();
        tracing::debug!(
            "Finished in {:?} with status {:?}: {}",
            duration,
            status.code(),
            invocation
        );

        if status.success() {
            Ok(InvocationOutcome::success(duration))
        } else {
            Ok(InvocationOutcome::failure(status.code(), duration))
        }
    }
}

/// Prints each invocation as a shell command line instead of running it.
pub struct DryRunBridge<W: Write> {
    out: W,
}

impl DryRunBridge<std::io::Stdout> {
    /// Dry-run bridge writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> DryRunBridge<W> {
    /// Dry-run bridge writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the bridge and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Bridge for DryRunBridge<W> {
    fn invoke(&mut self, invocation: &Invocation) -> Result<InvocationOutcome> {
        writeln!(self.out, "{}", invocation)?;
        self.out.flush()?;
        Ok(InvocationOutcome::success(Duration::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_prints_command_lines() {
        let mut bridge = DryRunBridge::new(Vec::new());
        bridge
            .invoke(&Invocation::connect("adb", "192.168.42.1:9050"))
            .unwrap();
        bridge
            .invoke(&Invocation::shell("adb", ["(cd /data/ && ./app)"]))
            .unwrap();

        let printed = String::from_utf8(bridge.into_inner()).unwrap();
        assert_eq!(
            printed,
            "adb connect 192.168.42.1:9050\nadb shell '(cd /data/ && ./app)'\n"
        );
    }

    #[test]
    fn dry_run_always_succeeds() {
        let mut bridge = DryRunBridge::new(Vec::new());
        let outcome = bridge.invoke(&Invocation::new("adb")).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.exit_code, Some(0));
    }

    #[test]
    fn missing_executable_is_bridge_unavailable() {
        let mut bridge = ProcessBridge::new();
        let err = bridge
            .invoke(&Invocation::connect(
                "bebop-test-no-such-bridge-executable",
                "127.0.0.1:9050",
            ))
            .unwrap_err();
        match err {
            BebopError::BridgeUnavailable { program, .. } => {
                assert_eq!(program, "bebop-test-no-such-bridge-executable");
            }
            other => panic!("Expected BridgeUnavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn process_exit_codes_are_reported() {
        let mut bridge = ProcessBridge::new();

        let ok = bridge.invoke(&Invocation::new("true")).unwrap();
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));

        let failed = bridge
            .invoke(&Invocation::new("sh").args(["-c", "exit 3"]))
            .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn arguments_are_not_shell_interpreted() {
        let temp = tempfile::TempDir::new().unwrap();
        let marker = temp.path().join("marker");
        let hostile = format!("x; touch {}", marker.display());

        let mut bridge = ProcessBridge::new();
        let outcome = bridge
            .invoke(&Invocation::new("echo").arg(hostile))
            .unwrap();

        assert!(outcome.success);
        assert!(!marker.exists());
    }
}
