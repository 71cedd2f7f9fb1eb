//! Visual theme and styling.

use console::Style;
use std::time::Duration;

/// bebop's visual theme.
#[derive(Debug, Clone)]
pub struct BebopTheme {
    /// Style for the success icon (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for durations (dim).
    pub duration: Style,
}

impl Default for BebopTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BebopTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            command: Style::new().dim().italic(),
            duration: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            command: Style::new(),
            duration: Style::new(),
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format a finished command: success icon, command in dim italic and
    /// the elapsed time dimmed.
    pub fn format_finished(&self, command: &str, duration: Duration) -> String {
        format!(
            "{} {} {}",
            self.success.apply_to("✓"),
            self.command.apply_to(command),
            self.duration.apply_to(format!("({:.1?})", duration))
        )
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_warning() {
        let theme = BebopTheme::plain();
        assert_eq!(theme.format_warning("Exited 1"), "⚠ Exited 1");
    }

    #[test]
    fn theme_formats_error() {
        let theme = BebopTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn theme_formats_finished_command() {
        let theme = BebopTheme::plain();
        assert_eq!(
            theme.format_finished("adb connect 192.168.42.1:9050", Duration::from_millis(250)),
            "✓ adb connect 192.168.42.1:9050 (250.0ms)"
        );
    }

    #[test]
    fn default_impl_matches_new() {
        let default = BebopTheme::default();
        let new = BebopTheme::new();
        assert_eq!(default.format_error("x"), new.format_error("x"));
    }
}
