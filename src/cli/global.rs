// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! --log-level N       ← Console verbosity (0-5), env PATCHENV_LOG_LEVEL
//! --file-log-level N  ← File verbosity (defaults to --log-level)
//! --log-file FILE     ← Also log to FILE
//! --command-var NAME  ← Control variable (default PATCH_ENV_COMMAND)
//! --shell-var NAME    ← Interpreter variable (default SHELL)
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::{DEFAULT_COMMAND_VAR, DEFAULT_SHELL_VAR, PatchConfig};
use crate::logging::{LogConfig, LogLevel};

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        env = "PATCHENV_LOG_LEVEL",
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true, value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Variable holding the command whose output patches the environment.
    #[arg(long = "command-var", value_name = "NAME", default_value = DEFAULT_COMMAND_VAR, global = true)]
    pub command_var: String,

    /// Variable naming the shell used to run the command.
    #[arg(long = "shell-var", value_name = "NAME", default_value = DEFAULT_SHELL_VAR, global = true)]
    pub shell_var: String,
}

impl GlobalOptions {
    /// Builds the patcher configuration from the variable-name options.
    #[must_use]
    pub fn to_patch_config(&self) -> PatchConfig {
        PatchConfig::builder()
            .with_command_var(self.command_var.clone())
            .with_shell_var(self.shell_var.clone())
            .build()
    }

    /// Builds the logging configuration; the file level falls back to the
    /// console level.
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();

        let file_level = self
            .file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(console_level);

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(self.log_file.clone())
            .build()
    }
}
