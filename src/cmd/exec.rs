// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exec command implementation.

use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;

use crate::cli::patch::ExecArgs;
use crate::config::PatchConfig;
use crate::error::Result;
use crate::patch::Patcher;

/// Patches this process's environment, then runs the program in it.
///
/// The program inherits stdin, stdout and stderr. Its exit code becomes
/// ours; termination by a signal maps to failure.
///
/// # Errors
///
/// Returns an error if the patch command fails or the program cannot be
/// started.
pub async fn run_exec_command(args: &ExecArgs, config: PatchConfig) -> Result<ExitCode> {
    let report = Patcher::new(config).patch_async().await?;
    debug!(keys = ?report.applied_keys(), "environment ready");

    let status = tokio::process::Command::new(&args.program)
        .args(&args.args)
        .status()
        .await
        .with_context(|| format!("failed to run {}", args.program))?;

    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from))
}
