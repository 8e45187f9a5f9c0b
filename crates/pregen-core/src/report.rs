//! Colored console reporting for check results
//!
//! All output goes to stdout. `colored` handles `NO_COLOR` and explicit
//! overrides, so targets without ANSI support get plain text uniformly.

use crate::validation::{Summary, Violation};
use colored::{ColoredString, Colorize};

/// How a reported line is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Bright red (ANSI 91)
    Failure,
    /// Bright green (ANSI 92)
    Success,
}

impl Tone {
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            Tone::Failure => text.bright_red(),
            Tone::Success => text.bright_green(),
        }
    }
}

/// Print a violation and its remediation hint (when one exists)
pub fn print_violation(violation: &Violation) {
    println!("{}", Tone::Failure.paint(&format!("ERROR: {violation}")));
    if let Some(hint) = violation.remediation() {
        println!("{}", Tone::Failure.paint(hint));
    }
}

/// Print the success summary echoing the resolved name and package
pub fn print_summary(summary: &Summary) {
    println!(
        "{}",
        Tone::Success.paint(&format!(
            "Proceeding with app name: {}, package name: {}",
            summary.project_name, summary.bundle_identifier
        ))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the color override is process-global state
    #[test]
    fn test_tone_escape_codes() {
        colored::control::set_override(true);
        assert!(Tone::Failure.paint("ERROR").to_string().starts_with("\u{1b}[91m"));
        assert!(Tone::Success.paint("ok").to_string().starts_with("\u{1b}[92m"));
        colored::control::unset_override();
    }
}
