// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Patching the environment from a command's output.
//!
//! ```text
//! patch()
//!   |
//!   v
//! env[PATCH_ENV_COMMAND] -- unset/empty --> Ok (no-op)
//!   |  (raw OS string, need not be Unicode)
//!   |
//!   v
//! env[SHELL] set?
//!   yes --> <shell> -c <command>
//!   no  --> split <command>, launch directly
//!   |
//!   v
//! run (stdin null, stdout+stderr buffered)
//!   fail --> stdout -> own stdout, stderr -> own stderr
//!            Err(CommandError { command, cause })
//!   ok   --> stderr dropped, stdout (lossy UTF-8) --> apply_output()
//!                                 |
//!                                 v
//!                           PatchReport (always Ok)
//! ```
//!
//! # Concurrency
//!
//! The process environment is global state. Run a patch before spawning
//! threads that read it, or serialize access yourself; nothing here locks.

pub mod parse;
pub mod report;


use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::Write;
use tracing::{debug, warn};

use crate::config::PatchConfig;
use crate::core::env::{EnvStore, ProcessEnv};
use crate::core::process::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{CommandError, PatchResult, ProcessError};

pub use parse::{ParsedLine, apply_output, parse_line};
pub use report::{Assignment, FailedAssignment, PatchReport};

/// Destinations for a failed command's captured output.
pub struct Diagnostics {
    stdout: Box<dyn Write + Send>,
    stderr: Box<dyn Write + Send>,
}

impl Diagnostics {
    /// Forward to this process's own stdout and stderr.
    #[must_use]
    pub fn process() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }

    /// Forward to the given writers.
    pub fn new(
        stdout: impl Write + Send + 'static,
        stderr: impl Write + Send + 'static,
    ) -> Self {
        Self {
            stdout: Box::new(stdout),
            stderr: Box::new(stderr),
        }
    }

    /// Drop the output.
    #[must_use]
    pub fn discard() -> Self {
        Self::new(std::io::sink(), std::io::sink())
    }

    /// Writes both buffers verbatim, stdout first. Write errors are ignored.
    fn forward(&mut self, output: &ProcessOutput) {
        let _ = self.stdout.write_all(output.stdout());
        let _ = self.stdout.flush();
        let _ = self.stderr.write_all(output.stderr());
        let _ = self.stderr.flush();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

/// Runs the configured command and applies its output to an [`EnvStore`].
#[derive(Debug)]
pub struct Patcher<E = ProcessEnv> {
    config: PatchConfig,
    env: E,
    diagnostics: Diagnostics,
}

impl Patcher<ProcessEnv> {
    /// A patcher for the real process environment.
    #[must_use]
    pub fn new(config: PatchConfig) -> Self {
        Self::with_env(config, ProcessEnv)
    }
}

impl Default for Patcher<ProcessEnv> {
    fn default() -> Self {
        Self::new(PatchConfig::default())
    }
}

impl<E: EnvStore> Patcher<E> {
    /// A patcher that reads and writes `env` instead of the process environment.
    ///
    /// The command itself still inherits the real process environment.
    pub fn with_env(config: PatchConfig, env: E) -> Self {
        Self {
            config,
            env,
            diagnostics: Diagnostics::process(),
        }
    }

    /// Replaces where a failed command's output is forwarded.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PatchConfig {
        &self.config
    }

    #[must_use]
    pub const fn env(&self) -> &E {
        &self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    /// Returns the command text from the control variable, if any.
    ///
    /// The text is returned as stored, including bytes that are not valid
    /// Unicode.
    #[must_use]
    pub fn control_command(&self) -> Option<OsString> {
        self.env
            .get(self.config.command_var())
            .filter(|command| !command.is_empty())
    }

    /// Runs the command named by the control variable and applies its output.
    ///
    /// Blocks the calling thread until the command exits.
    ///
    /// # Errors
    ///
    /// Returns `PatchEnvError::Config` for an invalid configuration and
    /// `PatchEnvError::Command` if the command cannot be started or exits
    /// with a failure status. In both cases the environment is untouched.
    pub fn patch(&mut self) -> PatchResult<PatchReport> {
        self.config.validate()?;
        let Some(command) = self.control_command() else {
            debug!(var = self.config.command_var(), "no patch command set");
            return Ok(PatchReport::noop());
        };
        self.patch_from_command(&command)
    }

    /// Async variant of [`Patcher::patch`] that awaits the command instead
    /// of blocking the runtime thread.
    ///
    /// # Errors
    ///
    /// Same as [`Patcher::patch`].
    pub async fn patch_async(&mut self) -> PatchResult<PatchReport> {
        self.config.validate()?;
        let Some(command) = self.control_command() else {
            debug!(var = self.config.command_var(), "no patch command set");
            return Ok(PatchReport::noop());
        };

        let result = match self.command_builder(&command) {
            Ok(builder) => builder.run().await,
            Err(e) => Err(e),
        };
        self.finish(&command, result)
    }

    /// Runs `command` (ignoring the control variable) and applies its output.
    ///
    /// # Errors
    ///
    /// Returns `PatchEnvError::Command` if the command cannot be started or
    /// exits with a failure status.
    pub fn patch_from_command(&mut self, command: impl AsRef<OsStr>) -> PatchResult<PatchReport> {
        let command = command.as_ref();
        let result = self
            .command_builder(command)
            .and_then(|builder| builder.run_blocking());
        self.finish(command, result)
    }

    /// Chooses between the user's shell and a direct launch.
    fn command_builder(&self, command: &OsStr) -> Result<ProcessBuilder, ProcessError> {
        match self
            .env
            .get(self.config.shell_var())
            .filter(|shell| !shell.is_empty())
        {
            Some(shell) => {
                debug!(shell = %shell.to_string_lossy(), "running patch command through shell");
                Ok(ProcessBuilder::shell(&shell, self.config.shell_flag(), command))
            }
            None => {
                debug!("running patch command directly");
                ProcessBuilder::from_command_line(command)
            }
        }
    }

    fn finish(
        &mut self,
        command: &OsStr,
        result: Result<ProcessOutput, ProcessError>,
    ) -> PatchResult<PatchReport> {
        let command = command.to_string_lossy();
        let output = result.map_err(|source| CommandError::new(&*command, source))?;

        if !output.success() {
            self.diagnostics.forward(&output);
            return Err(CommandError::new(command, output.exit_error()).into());
        }

        let stdout = output.stdout_text();
        if matches!(stdout, Cow::Owned(_)) {
            warn!(
                bytes = output.stdout().len(),
                "patchenv: command output is not valid UTF-8, invalid bytes replaced with U+FFFD"
            );
        }

        let report = apply_output(&mut self.env, &stdout);
        debug!(
            applied = report.applied().len(),
            malformed = report.malformed().len(),
            failed = report.failed().len(),
            "environment patched"
        );
        Ok(report)
    }
}

/// Patches the process environment from `PATCH_ENV_COMMAND`.
///
/// Does nothing if the variable is unset or empty. Otherwise runs it (through
/// `$SHELL -c` when `SHELL` is set) and sets every `KEY=value` line of its
/// output in this process. Must not race with other threads using the
/// environment.
///
/// # Errors
///
/// Returns an error naming the command if it cannot be started or exits with
/// a failure status; its captured stdout and stderr are written to this
/// process's stdout and stderr first.
pub fn patch() -> PatchResult<()> {
    Patcher::default().patch().map(|_| ())
}

/// Async variant of [`patch`].
///
/// # Errors
///
/// Same as [`patch`].
pub async fn patch_async() -> PatchResult<()> {
    Patcher::default().patch_async().await.map(|_| ())
}
