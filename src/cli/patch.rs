// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the patching commands.

use clap::Args;

/// Arguments for `patchenv exec`.
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Program to run with the patched environment.
    #[arg(value_name = "PROGRAM")]
    pub program: String,

    /// Arguments passed to the program unchanged.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for `patchenv print`.
#[derive(Debug, Clone, Default, Args)]
pub struct PrintArgs {
    /// Prints the full report (applied, malformed and failed lines) as JSON.
    #[arg(long)]
    pub json: bool,
}
