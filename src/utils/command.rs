//! Command execution utilities

use crate::error::{LogindashError, Result};
use std::process::Command;

/// Execute a command and return stdout as String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(LogindashError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}

/// Execute a command and return stdout whatever the exit status.
///
/// `systemctl is-active` and `systemctl status` report inactive or failed
/// units through a non-zero exit while still printing the text we want.
pub fn run_command_lossy(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Execute command and return success status only
pub fn command_succeeds(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
