// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment.
//!
//! ```text
//! Env
//! vars: BTreeMap<EnvKey, String> (deterministic order)
//! get/set/remove/iter/to_map, FromIterator
//! set() validates like the real process environment
//! ```

use super::types::EnvKey;
use super::{EnvStore, validate_assignment};
use crate::error::EnvError;
use std::collections::BTreeMap;
use std::ffi::OsString;

/// A set of environment variables held in memory.
///
/// Stands in for the process environment wherever an [`EnvStore`] is
/// accepted, without touching global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Sets an environment variable.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvError`] under the same rules as the process
    /// environment (see [`validate_assignment`]).
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, EnvError> {
        let key = key.into();
        let value = value.into();
        validate_assignment(&key, &value)?;
        self.vars.insert(EnvKey::new(key), value);
        Ok(self)
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl EnvStore for Env {
    fn get(&self, key: &str) -> Option<OsString> {
        Self::get(self, key).map(OsString::from)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        Self::set(self, key, value).map(|_| ())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (EnvKey::new(k), v.into()))
                .collect(),
        }
    }
}
