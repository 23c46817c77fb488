// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//!   EnvStore (get -> OsString / set)
//!             /               \
//!            v                 v
//!      ProcessEnv             Env
//!   std::env (global)   BTreeMap<EnvKey, String>
//!            \                 /
//!             v               v
//!          validate_assignment()
//!   key: non-empty, no '=', no NUL
//!   value: no NUL
//! ```
//!
//! - **Single write path**: the patcher only touches the environment through
//!   [`EnvStore`], so tests can swap in an in-memory [`Env`]
//! - **Reads are raw**: a value that is not valid Unicode is still a value,
//!   never mistaken for an unset variable
//! - **Case-insensitive keys on Windows**, case-sensitive elsewhere
//! - **Errors instead of panics**: `std::env::set_var` panics on names and
//!   values the OS rejects, so both stores validate first

pub mod container;
pub mod types;

#[cfg(test)]
mod tests;

use std::ffi::OsString;

use crate::error::EnvError;

/// Read/write access to a set of environment variables.
pub trait EnvStore {
    /// Returns the value of `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Sets `key` to `value`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvError`] if the name or value cannot be stored.
    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError>;
}

impl<T: EnvStore + ?Sized> EnvStore for &mut T {
    fn get(&self, key: &str) -> Option<OsString> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        (**self).set(key, value)
    }
}

/// The environment of the running process.
///
/// Writes are visible to the rest of the process and inherited by any child
/// process spawned afterwards. Foreign code reading the environment on
/// another thread is not coordinated with these writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        validate_assignment(key, value)?;
        // SAFETY: validated above, so set_var cannot panic. std serializes its
        // own env access; callers must keep foreign code that reads `environ`
        // (C getenv) off other threads while patching.
        unsafe { std::env::set_var(key, value) };
        Ok(())
    }
}

/// Checks that `key=value` can be stored in a process environment.
///
/// # Errors
///
/// Returns [`EnvError::InvalidKey`] for an empty name or one containing `=`
/// or NUL, and [`EnvError::InvalidValue`] for a value containing NUL.
pub fn validate_assignment(key: &str, value: &str) -> Result<(), EnvError> {
    let key_problem = if key.is_empty() {
        Some("name is empty")
    } else if key.contains('=') {
        Some("name contains '='")
    } else if key.contains('\0') {
        Some("name contains a NUL character")
    } else {
        None
    };

    if let Some(reason) = key_problem {
        return Err(EnvError::InvalidKey {
            key: key.to_string(),
            reason,
        });
    }

    if value.contains('\0') {
        return Err(EnvError::InvalidValue {
            key: key.to_string(),
            reason: "value contains a NUL character",
        });
    }

    Ok(())
}
