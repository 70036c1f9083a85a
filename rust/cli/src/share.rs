//! Hands invitation text to an external program, e.g. `wl-copy` or
//! `xclip -selection clipboard`.

use std::io::Write;
use std::process::{Command, Stdio};

use cardroom_engine::errors::ShareError;
use cardroom_engine::share::ShareTarget;

#[derive(Debug, Clone)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    /// `None` when `command` is empty.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ShareTarget for CommandShare {
    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| ShareError::Unavailable(format!("{}: {}", self.program, e)))?;
        // stdin is dropped before waiting so the program sees end of input
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        if !status.success() {
            return Err(ShareError::Failed(std::io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            ))));
        }
        written?;
        Ok(())
    }
}
