// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for patchenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! patchenv [global options] <command>
//! exec <program> [args...]
//! print [--json]
//! version
//! ```

pub mod global;
pub mod patch;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::patch::{ExecArgs, PrintArgs};
use clap::{Parser, Subcommand};

/// Patch the environment from a command's `KEY=value` output.
#[derive(Debug, Parser)]
#[command(
    name = "patchenv",
    author,
    version,
    about = "Patch the environment from a command's KEY=value output",
    long_about = "patchenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs the command in $PATCH_ENV_COMMAND (through $SHELL -c when\n\
                  SHELL is set), reads `KEY=value` lines from its output and sets\n\
                  them in the environment before running a program.",
    after_help = "EXAMPLE:\n\n\
                  PATCH_ENV_COMMAND='aws configure export-credentials --format env-no-export' \\\n\
                  \x20   patchenv exec -- terraform plan"
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Patches the environment, then runs a program in it.
    Exec(ExecArgs),

    /// Patches the environment and prints the variables that were set.
    Print(PrintArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
