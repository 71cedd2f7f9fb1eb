//! Recording bridge for testing.
//!
//! `RecordingBridge` implements [`Bridge`] without spawning anything. It
//! records every invocation for later assertion and replies with
//! pre-configured outcomes.
//!
//! # Example
//!
//! ```
//! use bebop::bridge::{Bridge, Invocation, RecordingBridge};
//!
//! let mut bridge = RecordingBridge::new();
//! bridge.fail_when("killall", Some(1));
//!
//! let outcome = bridge
//!     .invoke(&Invocation::shell("adb", ["killall", "-9", "app"]))
//!     .unwrap();
//! assert!(!outcome.success);
//! assert_eq!(bridge.calls()[0], ["shell", "killall", "-9", "app"]);
//! ```

use std::time::Duration;

use crate::error::Result;

use super::{Bridge, Invocation, InvocationOutcome};

/// Bridge that records invocations instead of running them.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    invocations: Vec<Invocation>,
    failures: Vec<(String, Option<i32>)>,
}

impl RecordingBridge {
    /// Create a bridge where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any invocation whose arguments include `arg`, with `exit_code`.
    pub fn fail_when(&mut self, arg: &str, exit_code: Option<i32>) {
        self.failures.push((arg.to_string(), exit_code));
    }

    /// All invocations seen so far, in order.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Argument vectors of all invocations, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.invocations
            .iter()
            .map(|inv| inv.arguments().to_vec())
            .collect()
    }
}

impl Bridge for RecordingBridge {
    fn invoke(&mut self, invocation: &Invocation) -> Result<InvocationOutcome> {
        self.invocations.push(invocation.clone());

        let failure = self
            .failures
            .iter()
            .find(|(arg, _)| invocation.arguments().iter().any(|a| a == arg));

        Ok(match failure {
            Some((_, code)) => InvocationOutcome::failure(*code, Duration::ZERO),
            None => InvocationOutcome::success(Duration::ZERO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut bridge = RecordingBridge::new();
        bridge.invoke(&Invocation::connect("adb", "a:1")).unwrap();
        bridge.invoke(&Invocation::push("adb", "x", "y")).unwrap();

        assert_eq!(bridge.invocations().len(), 2);
        assert_eq!(bridge.calls()[0], ["connect", "a:1"]);
        assert_eq!(bridge.calls()[1], ["push", "x", "y"]);
    }

    #[test]
    fn configured_failures_apply_by_argument() {
        let mut bridge = RecordingBridge::new();
        bridge.fail_when("push", Some(1));

        let pushed = bridge.invoke(&Invocation::push("adb", "x", "y")).unwrap();
        let connected = bridge.invoke(&Invocation::connect("adb", "a:1")).unwrap();

        assert!(!pushed.success);
        assert_eq!(pushed.exit_code, Some(1));
        assert!(connected.success);
    }
}
