//! Running the wrapped command

use std::process::{Command, Stdio};

/// Executes a forwarded command
pub trait CommandRunner {
    /// Run `command` with `args`. The child's exit status is not reported back.
    fn run(&self, command: &str, args: &[String]);
}

/// Spawns the command with kubesafe's own stdin, stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &str, args: &[String]) {
        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) => log::debug!("{command} exited with {status}"),
            Err(e) => log::warn!("failed to run {command}: {e}"),
        }
    }
}
