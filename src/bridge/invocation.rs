//! A single call of the bridge executable.

use std::fmt;
use std::time::Duration;

use super::quote;

/// One external process call: the bridge executable and its argument vector.
///
/// Arguments are passed to the process verbatim. Nothing is interpreted by a
/// local shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `<bridge> connect <address>`
    pub fn connect(bridge: &str, address: &str) -> Self {
        Self::new(bridge).arg("connect").arg(address)
    }

    /// `<bridge> push <source> <destination>`
    pub fn push(bridge: &str, source: &str, destination: &str) -> Self {
        Self::new(bridge).arg("push").arg(source).arg(destination)
    }

    /// `<bridge> shell <words...>`
    ///
    /// The bridge joins the words with spaces and hands them to the device's
    /// shell, so they are still subject to remote shell parsing.
    pub fn shell<I, S>(bridge: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(bridge).arg("shell").args(words)
    }

    /// The executable to spawn.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the executable.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    /// Render as a command line that a POSIX shell would split back into
    /// the same argument vector.
    pub fn command_line(&self) -> String {
        quote::join(std::iter::once(&self.program).chain(self.args.iter()))
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// What happened when an invocation ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the process exited with code 0.
    pub success: bool,

    /// Wall-clock time spent waiting for the process.
    pub duration: Duration,
}

impl InvocationOutcome {
    /// Create a success outcome.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            duration,
        }
    }

    /// Create a failure outcome.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            success: false,
            duration,
        }
    }

    /// Exit status to report for this outcome; 1 when killed by a signal.
    pub fn status_code(&self) -> i32 {
        match self.exit_code {
            Some(code) => code,
            None if self.success => 0,
            None => 1,
        }
    }
}
