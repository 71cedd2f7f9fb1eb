//! Device session operations.
//!
//! Each operation turns its arguments into a [`Plan`] of bridge
//! invocations. Plans are pure values; running them is left to the caller.
//!
//! # Example
//!
//! ```
//! use bebop::session::{Session, DEFAULT_PROGRAM_PATH};
//!
//! let session = Session::new("adb");
//! let plan = session.run("myapp", DEFAULT_PROGRAM_PATH);
//! assert_eq!(
//!     plan.script(),
//!     "adb shell kk\n\
//!      adb shell killall -9 myapp\n\
//!      adb shell '(cd /data/ftp/internal_000/tudelft_vision/ && ./myapp)'"
//! );
//! ```

pub mod plan;

pub use plan::{Plan, PlanReport, Step, StepReport};

use crate::bridge::Invocation;

/// Address of the drone's vision computer on its own access point.
pub const DEFAULT_IP: &str = "192.168.42.1";

/// Port the drone's debug bridge listens on.
pub const DEFAULT_PORT: u16 = 9050;

/// Local directory holding built binaries.
pub const DEFAULT_BIN_DIR: &str = "build/bin/";

/// Directory on the device that programs are uploaded to and run from.
pub const DEFAULT_PROGRAM_PATH: &str = "/data/ftp/internal_000/tudelft_vision/";

/// Command issued on the device before anything else when running a program.
pub const KEEPALIVE_COMMAND: &str = "kk";

/// Builds bridge invocations for one bridge executable.
#[derive(Debug, Clone)]
pub struct Session {
    bridge: String,
}

impl Session {
    /// Create a session using the given bridge executable.
    pub fn new(bridge: impl Into<String>) -> Self {
        Self {
            bridge: bridge.into(),
        }
    }

    /// The bridge executable.
    pub fn bridge(&self) -> &str {
        &self.bridge
    }

    /// Attach the bridge to the device at `ip:port`.
    pub fn connect(&self, ip: &str, port: u16) -> Plan {
        Plan::single(Invocation::connect(&self.bridge, &device_address(ip, port)))
    }

    /// Copy `bin + program` to `path + program` on the device.
    ///
    /// Both paths are plain concatenations; no separator is inserted.
    pub fn upload(&self, program: &str, bin: &str, path: &str) -> Plan {
        let source = format!("{bin}{program}");
        let destination = format!("{path}{program}");
        Plan::single(Invocation::push(&self.bridge, &source, &destination))
    }

    /// Restart `program` on the device from inside `path`.
    ///
    /// Issues the keepalive command, kills any running instance, then starts
    /// the program. The first two steps routinely fail (nothing to kill) and
    /// never prevent the last one.
    pub fn run(&self, program: &str, path: &str) -> Plan {
        Plan::new()
            .then_tolerating_failure(Invocation::shell(&self.bridge, [KEEPALIVE_COMMAND]))
            .then_tolerating_failure(Invocation::shell(
                &self.bridge,
                ["killall", "-9", program],
            ))
            .then(Invocation::shell(
                &self.bridge,
                [launch_command(program, path)],
            ))
    }
}

/// `ip:port` as the bridge expects it.
pub fn device_address(ip: &str, port: u16) -> String {
    format!("{ip}:{port}")
}

/// Remote command that starts `program` from `path` in a subshell.
pub fn launch_command(program: &str, path: &str) -> String {
    format!("(cd {path} && ./{program})")
}
