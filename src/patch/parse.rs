// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output parsing and application.
//!
//! ```text
//! stdout text --split '\n', drop one trailing '\r'--> parse_line()
//!   ""            Empty       ignored
//!   "NOVALUE"     Malformed   warn, skip
//!   "=value"      Malformed   warn, skip
//!   "K=v=w"       Assignment  { K, "v=w" } --> EnvStore::set
//!                                   Err --> warn, skip
//! ```

use tracing::warn;

use super::report::PatchReport;
use crate::core::env::EnvStore;

/// Classification of one line of command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Nothing on the line.
    Empty,
    /// No `=`, or nothing before the first `=`.
    Malformed,
    /// `key=value`, split at the first `=`.
    Assignment { key: &'a str, value: &'a str },
}

/// Splits a line (without its terminator) into a key/value pair.
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    if line.is_empty() {
        return ParsedLine::Empty;
    }

    match line.split_once('=') {
        Some((key, value)) if !key.is_empty() => ParsedLine::Assignment { key, value },
        _ => ParsedLine::Malformed,
    }
}

/// Applies every `KEY=value` line of `output` to `env`, in order.
///
/// Never fails: malformed lines and rejected assignments are logged at
/// warn level, recorded in the report and skipped.
pub fn apply_output<E: EnvStore + ?Sized>(env: &mut E, output: &str) -> PatchReport {
    output
        .split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .fold(PatchReport::new(), |mut report, line| {
            match parse_line(line) {
                ParsedLine::Empty => {}
                ParsedLine::Malformed => {
                    warn!(line, "patchenv: invalid output line");
                    report.record_malformed(line);
                }
                ParsedLine::Assignment { key, value } => match env.set(key, value) {
                    Ok(()) => report.record_applied(key, value),
                    Err(error) => {
                        warn!(key, value, %error, "patchenv: failed to set environment variable");
                        report.record_failed(key, value, &error);
                    }
                },
            }
            report
        })
}
