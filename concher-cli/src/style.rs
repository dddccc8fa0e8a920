//! Terminal styling shared by every command.
//!
//! `colored` turns itself off when stdout is not a terminal or `NO_COLOR` is set.

use colored::{ColoredString, Colorize};

pub fn error_label() -> ColoredString {
    "Error:".red().bold()
}

pub fn warning_label() -> ColoredString {
    "Warning:".red().bold()
}

pub fn launch_failed_label() -> ColoredString {
    "Launch failed:".red().bold()
}

/// Registry names are always printed in bold.
pub fn name(s: &str) -> ColoredString {
    s.bold()
}
