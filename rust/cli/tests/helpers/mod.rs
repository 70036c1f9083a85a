//! Shared test helpers.
//!
//! - `cli_runner`: `Sandbox` runs `cardroom_cli::run` in-process against a
//!   private state directory with a clean `CARDROOM_*` environment.
pub mod cli_runner;
