//! UI helper functions for terminal output formatting.
//!
//! Consistent prefixes for errors, warnings and notes across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Reminder shown when moving to the next round; rounds are kept in step
/// out loud, not over the network.
pub fn write_round_reminder(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Make sure that everyone else also goes to the next round at the same time."
    )
}
