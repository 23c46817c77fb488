// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Patcher configuration.
//!
//! ```text
//! PatchConfig
//!   command_var  PATCH_ENV_COMMAND  command text to run (unset/empty = no-op)
//!   shell_var    SHELL              interpreter; unset/empty = direct launch
//!   shell_flag   -c                 flag placed before the command text
//! ```
//!
//! There are no configuration files; values come from code or CLI flags.

use bon::Builder;

use crate::error::ConfigError;

/// Default control variable holding the command to run.
pub const DEFAULT_COMMAND_VAR: &str = "PATCH_ENV_COMMAND";

/// Default variable naming the user's preferred shell.
pub const DEFAULT_SHELL_VAR: &str = "SHELL";

/// Default flag used to pass the command text to the shell.
pub const DEFAULT_SHELL_FLAG: &str = "-c";

/// Names and flags used by the patcher.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct PatchConfig {
    #[builder(setters(name = with_command_var), into, default = DEFAULT_COMMAND_VAR.to_string())]
    command_var: String,
    #[builder(setters(name = with_shell_var), into, default = DEFAULT_SHELL_VAR.to_string())]
    shell_var: String,
    #[builder(setters(name = with_shell_flag), into, default = DEFAULT_SHELL_FLAG.to_string())]
    shell_flag: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PatchConfig {
    /// Name of the control variable holding the command text.
    #[must_use]
    pub fn command_var(&self) -> &str {
        &self.command_var
    }

    /// Name of the variable holding the interpreter path.
    #[must_use]
    pub fn shell_var(&self) -> &str {
        &self.shell_var
    }

    /// Flag that tells the interpreter to run its next argument.
    #[must_use]
    pub fn shell_flag(&self) -> &str {
        &self.shell_flag
    }

    /// Checks that every name can be looked up in an environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty variable name, a
    /// name containing `=` or NUL, or an empty shell flag.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, name) in [
            ("command_var", &self.command_var),
            ("shell_var", &self.shell_var),
        ] {
            let problem = if name.is_empty() {
                Some("must not be empty")
            } else if name.contains('=') || name.contains('\0') {
                Some("must not contain '=' or NUL")
            } else {
                None
            };
            if let Some(message) = problem {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: message.to_string(),
                });
            }
        }

        if self.shell_flag.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "shell_flag".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
