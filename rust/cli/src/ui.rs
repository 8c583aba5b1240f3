//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Short notice shown to the player, e.g. "Not enough credits!"
pub fn write_message(out: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(out, ">> {}", message)
}
