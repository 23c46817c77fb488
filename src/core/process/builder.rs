// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder and captured output.
//!
//! ```text
//! ProcessBuilder
//!  • new/shell/from_command_line
//!  • arg/args/name
//!
//! from_command_line splitting:
//!   Unix     POSIX shell words over raw bytes (shlex): quotes group,
//!            no pipes/redirection, non-UTF-8 bytes pass through
//!   Windows  whitespace (programs parse their own command line)
//! ```

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::error::ProcessError;

/// Output from a completed process.
///
/// Both streams are kept as raw bytes so they can be forwarded verbatim.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    program: String,
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl ProcessOutput {
    pub(super) fn from_std(program: String, output: std::process::Output) -> Self {
        Self {
            program,
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }

    /// Returns the exit status.
    #[must_use]
    pub const fn status(&self) -> ExitStatus {
        self.status
    }

    /// Returns the exit code, if the process was not killed by a signal.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Returns captured stdout.
    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    /// Returns captured stderr.
    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    /// Returns captured stdout as text, replacing invalid UTF-8.
    #[must_use]
    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    /// Builds the error describing a failed exit status.
    #[must_use]
    pub fn exit_error(&self) -> ProcessError {
        ProcessError::NonZeroExit {
            program: self.program.clone(),
            status: self.status,
        }
    }
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<OsString>,
    /// Display name for logging
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the executable name.
    /// A bare name is resolved via PATH when the process is spawned.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            name: None,
        }
    }

    /// Creates a `ProcessBuilder` that hands `command` to an interpreter.
    ///
    /// Produces `<shell> <flag> <command>`; quoting, pipes and redirection
    /// are whatever the interpreter makes of them.
    pub fn shell(shell: impl AsRef<Path>, flag: &str, command: impl AsRef<OsStr>) -> Self {
        Self::new(shell).arg(flag).arg(command)
    }

    /// Creates a `ProcessBuilder` from a command line without any interpreter.
    ///
    /// The first word is the program; if it is a bare name it is looked up
    /// in PATH with `which`. Shell metacharacters such as `|` or `>` are
    /// passed through as ordinary arguments.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::InvalidCommandLine` for unbalanced quotes (and,
    /// on Windows, text that is not valid Unicode),
    /// `ProcessError::EmptyCommandLine` when there is no program word, and
    /// `ProcessError::ExecutableNotFound` when a bare program name is not in PATH.
    pub fn from_command_line(command: impl AsRef<OsStr>) -> Result<Self, ProcessError> {
        let command = command.as_ref();
        let mut words = split_command_line(command)
            .ok_or_else(|| ProcessError::InvalidCommandLine {
                command: command.to_string_lossy().into_owned(),
            })?
            .into_iter();

        let program = words.next().ok_or(ProcessError::EmptyCommandLine)?;
        let resolved = resolve_program(&program)?;

        Ok(Self::new(resolved)
            .name(program.to_string_lossy())
            .args(words))
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Sets a display name for logging and errors.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns a slice of the arguments.
    #[must_use]
    pub fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    /// Returns the display name for this process.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.program.file_stem().map_or_else(
                || "process".to_string(),
                |s| s.to_string_lossy().into_owned(),
            )
        })
    }
}

#[cfg(unix)]
fn split_command_line(command: &OsStr) -> Option<Vec<OsString>> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    shlex::bytes::split(command.as_bytes())
        .map(|words| words.into_iter().map(OsString::from_vec).collect())
}

#[cfg(not(unix))]
fn split_command_line(command: &OsStr) -> Option<Vec<OsString>> {
    Some(
        command
            .to_str()?
            .split_whitespace()
            .map(OsString::from)
            .collect(),
    )
}

/// Resolves a bare program name through PATH; paths are used as given.
fn resolve_program(program: &OsStr) -> Result<PathBuf, ProcessError> {
    let path = Path::new(program);
    if path.components().count() > 1 || path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
        name: program.to_string_lossy().into_owned(),
    })
}
