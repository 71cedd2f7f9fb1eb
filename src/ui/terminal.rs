//! Terminal UI.

use console::Term;
use std::io::Write;
use std::time::Duration;

use super::{should_use_colors, BebopTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status messages go to stdout; warnings and errors go to stderr so they
/// never mix with dry-run output.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: BebopTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            BebopTheme::new()
        } else {
            BebopTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn finished(&mut self, command: &str, duration: Duration) {
        if self.mode.shows_details() {
            writeln!(self.out, "{}", self.theme.format_finished(command, duration)).ok();
        }
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
