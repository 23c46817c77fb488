// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Summary of one patch run.

use serde::Serialize;

use crate::error::EnvError;

/// A variable that was set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// A well-formed line whose assignment the environment rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedAssignment {
    pub key: String,
    pub value: String,
    pub reason: String,
}

/// What a patch run did, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    ran_command: bool,
    applied: Vec<Assignment>,
    malformed: Vec<String>,
    failed: Vec<FailedAssignment>,
}

impl PatchReport {
    /// An empty report for a command that ran.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ran_command: true,
            applied: Vec::new(),
            malformed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// The report for an unset or empty control variable.
    #[must_use]
    pub const fn noop() -> Self {
        Self {
            ran_command: false,
            applied: Vec::new(),
            malformed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// True when no command was configured, so nothing was run.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        !self.ran_command
    }

    /// Assignments applied, including repeats of the same key.
    #[must_use]
    pub fn applied(&self) -> &[Assignment] {
        &self.applied
    }

    /// Lines skipped for lacking a `KEY=` prefix.
    #[must_use]
    pub fn malformed(&self) -> &[String] {
        &self.malformed
    }

    /// Assignments the environment rejected.
    #[must_use]
    pub fn failed(&self) -> &[FailedAssignment] {
        &self.failed
    }

    /// Keys that were set, deduplicated, in first-seen order.
    #[must_use]
    pub fn applied_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::with_capacity(self.applied.len());
        for assignment in &self.applied {
            if !keys.contains(&assignment.key.as_str()) {
                keys.push(&assignment.key);
            }
        }
        keys
    }

    pub(super) fn record_applied(&mut self, key: &str, value: &str) {
        self.applied.push(Assignment {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    pub(super) fn record_malformed(&mut self, line: &str) {
        self.malformed.push(line.to_string());
    }

    pub(super) fn record_failed(&mut self, key: &str, value: &str, error: &EnvError) {
        self.failed.push(FailedAssignment {
            key: key.to_string(),
            value: value.to_string(),
            reason: error.to_string(),
        });
    }
}

impl Default for PatchReport {
    fn default() -> Self {
        Self::new()
    }
}
