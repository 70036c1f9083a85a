//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Usage errors, invalid configuration, bad cards or links, and commands
/// that need a game when none is in progress.
pub const ERROR: i32 = 2;
