// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Print command implementation.

use std::io::Write;

use crate::cli::patch::PrintArgs;
use crate::config::PatchConfig;
use crate::error::Result;
use crate::patch::{PatchReport, Patcher};

/// Patches the environment and prints what was set.
///
/// # Errors
///
/// Returns an error if the patch command fails or stdout cannot be written.
pub async fn run_print_command(args: &PrintArgs, config: PatchConfig) -> Result<()> {
    let report = Patcher::new(config).patch_async().await?;
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &report, args.json)
}

/// Writes `KEY=value` lines in output order, or the whole report as JSON.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report(out: &mut impl Write, report: &PatchReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        for assignment in report.applied() {
            writeln!(out, "{}={}", assignment.key, assignment.value)?;
        }
    }
    out.flush()?;
    Ok(())
}
