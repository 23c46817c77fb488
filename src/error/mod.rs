// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        PatchEnvError (~16 bytes)
//!             |
//!       +-----+-----+
//!       v           v
//!    Command      Config
//!      Box         Box
//!       |
//!       v
//!  ProcessError  InvalidCommandLine, EmptyCommandLine,
//!                ExecutableNotFound, SpawnFailed, NonZeroExit
//!
//! EnvError  InvalidKey, InvalidValue
//!   Returned by EnvStore::set. A patch logs it per line and records it in
//!   the report; it never propagates out of a patch.
//! ```

use std::process::ExitStatus;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PatchEnvError`].
pub type PatchResult<T> = std::result::Result<T, PatchEnvError>;

/// Top-level library error type.
///
/// Sub-errors are boxed to keep this enum at ~16 bytes on the stack.
#[derive(Debug, Error)]
pub enum PatchEnvError {
    /// The patch command could not be run or exited with an error status.
    #[error(transparent)]
    Command(#[from] Box<CommandError>),

    /// The patcher configuration names an unusable variable or flag.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

impl PatchEnvError {
    /// Returns the patch command text if this error came from running it.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Command(err) => Some(err.command()),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PatchEnvError {
                fn from(err: $error) -> Self {
                    PatchEnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    CommandError => Command,
    ConfigError => Config,
}

// --- Command Errors ---

/// Failure of the patch command, carrying the command text.
///
/// The display form names the command; the underlying process error is
/// available through [`std::error::Error::source`] (and `{:#}` with anyhow).
#[derive(Debug, Error)]
#[error("patchenv command {command:?} failed")]
pub struct CommandError {
    command: String,
    #[source]
    source: ProcessError,
}

impl CommandError {
    pub fn new(command: impl Into<String>, source: ProcessError) -> Self {
        Self {
            command: command.into(),
            source,
        }
    }

    /// The command text as read from the control variable, with any bytes
    /// that are not valid Unicode replaced.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The underlying start or exit failure.
    #[must_use]
    pub const fn process_error(&self) -> &ProcessError {
        &self.source
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command line could not be split into words (unbalanced quotes).
    #[error("invalid command line: {command:?}")]
    InvalidCommandLine { command: String },

    /// The command line contains no program name.
    #[error("empty command line")]
    EmptyCommandLine,

    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to start '{program}'")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a failure status (non-zero code or signal).
    #[error("{status}")]
    NonZeroExit { program: String, status: ExitStatus },
}

// --- Environment Errors ---

/// Errors raised when an assignment violates the platform's rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The variable name cannot be stored in the environment.
    #[error("invalid variable name {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// The value cannot be stored in the environment.
    #[error("invalid value for {key:?}: {reason}")]
    InvalidValue { key: String, reason: &'static str },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
