//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use bebop::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("adb exited with code 1");
//!
//! assert!(ui.has_warning("code 1"));
//! assert!(ui.errors().is_empty());
//! ```

use std::time::Duration;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    finished: Vec<(String, Duration)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all reported finished commands with their durations.
    pub fn finished_commands(&self) -> &[(String, Duration)] {
        &self.finished
    }

    /// Check whether any warning contains `msg`.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check whether any error contains `msg`.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn finished(&mut self, command: &str, duration: Duration) {
        self.finished.push((command.to_string(), duration));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.warning("w");
        ui.error("e");
        ui.finished("adb shell kk", Duration::from_millis(5));

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(
            ui.finished_commands(),
            [("adb shell kk".to_string(), Duration::from_millis(5))]
        );
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
