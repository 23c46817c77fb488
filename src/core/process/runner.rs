// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run_blocking() / run()
//!        |
//!        v
//!  build_command()
//!  args, stdin null, stdout/stderr piped
//!        |
//!        v
//!  output()  (std or tokio)
//!        |
//!        v
//!  ProcessOutput { status, stdout, stderr }
//! ```
//!
//! A failed exit status is not an error here; callers decide what it means.

use std::process::{Command, Stdio};
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Builds the std Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command
            .args(self.args_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }

    /// Runs the process to completion on the current thread.
    ///
    /// Blocks until the process exits; there is no timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the process cannot be started
    /// or its output cannot be collected.
    pub fn run_blocking(&self) -> Result<ProcessOutput, ProcessError> {
        let name = self.display_name();
        debug!(process = %name, "exec");
        // Arguments may carry credentials; keep them out of default log levels.
        trace!(cmd = %self.command_line(), "command line");

        let output = self
            .build_command()
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                program: name.clone(),
                source,
            })?;

        let output = ProcessOutput::from_std(name, output);
        trace!(status = %output.status(), stdout_bytes = output.stdout().len(), "completed");
        Ok(output)
    }

    /// Runs the process to completion without blocking the async runtime.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if the process cannot be started
    /// or its output cannot be collected.
    pub async fn run(&self) -> Result<ProcessOutput, ProcessError> {
        let name = self.display_name();
        debug!(process = %name, "exec");
        trace!(cmd = %self.command_line(), "command line");

        let mut command = tokio::process::Command::from(self.build_command());
        command.kill_on_drop(true);

        let output = command
            .output()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                program: name.clone(),
                source,
            })?;

        let output = ProcessOutput::from_std(name, output);
        trace!(status = %output.status(), stdout_bytes = output.stdout().len(), "completed");
        Ok(output)
    }
}
