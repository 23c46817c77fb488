// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::{EnvStore, ProcessEnv, validate_assignment};
use crate::core::env::container::Env;
use crate::error::EnvError;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar").unwrap();

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);

    env.remove("FOO");
    assert!(env.is_empty());
}

#[test]
fn test_env_overwrite() {
    let mut env = Env::new();
    env.set("KEY", "first").unwrap().set("KEY", "second").unwrap();

    assert_eq!(env.get("KEY"), Some("second"));
    assert_eq!(env.len(), 1);
}

#[cfg(windows)]
#[test]
fn test_env_keys_case_insensitive() {
    let mut env = Env::new();
    env.set("Path", "C:\\bin").unwrap();
    assert_eq!(env.get("PATH"), Some("C:\\bin"));
}

#[cfg(not(windows))]
#[test]
fn test_env_keys_case_sensitive() {
    let mut env = Env::new();
    env.set("Path", "/bin").unwrap();
    assert_eq!(env.get("PATH"), None);
    assert_eq!(env.get("Path"), Some("/bin"));
}

#[test]
fn test_env_values_kept_verbatim() {
    let mut env = Env::new();
    env.set("EMPTY", "").unwrap();
    env.set("HINT", r#"values can have spaces and "special chars""#)
        .unwrap();
    env.set("EQ", "a=b=c").unwrap();

    assert_eq!(env.get("EMPTY"), Some(""));
    assert_eq!(
        env.get("HINT"),
        Some(r#"values can have spaces and "special chars""#)
    );
    assert_eq!(env.get("EQ"), Some("a=b=c"));
}

#[test]
fn test_validate_assignment_rules() {
    assert!(validate_assignment("OK_NAME", "any value = fine").is_ok());
    assert!(validate_assignment("lower.case-name", "").is_ok());

    let rejected: Vec<_> = [
        ("", "v"),
        ("A=B", "v"),
        ("NUL\0KEY", "v"),
        ("KEY", "nul\0value"),
    ]
    .into_iter()
    .map(|(k, v)| validate_assignment(k, v).unwrap_err().to_string())
    .collect();

    insta::assert_debug_snapshot!(rejected, @r#"
    [
        "invalid variable name \"\": name is empty",
        "invalid variable name \"A=B\": name contains '='",
        "invalid variable name \"NUL\\0KEY\": name contains a NUL character",
        "invalid value for \"KEY\": value contains a NUL character",
    ]
    "#);
}

#[test]
fn test_env_set_rejects_invalid() {
    let mut env = Env::new();
    let err = env.set("BAD\0", "x").unwrap_err();
    assert!(matches!(err, EnvError::InvalidKey { .. }));
    assert!(env.is_empty(), "rejected assignment must not be stored");
}

#[test]
fn test_env_store_through_trait() {
    fn write_through<S: EnvStore>(store: &mut S) -> Option<OsString> {
        store.set("VIA_TRAIT", "yes").ok()?;
        store.get("VIA_TRAIT")
    }

    let mut env = Env::new();
    assert_eq!(write_through(&mut env).as_deref(), Some(OsStr::new("yes")));
    assert_eq!(
        write_through(&mut &mut env).as_deref(),
        Some(OsStr::new("yes"))
    );
}

#[test]
fn test_env_from_iterator_and_map() {
    let env: Env = [("B", "2"), ("A", "1")].into_iter().collect();
    let mut map = BTreeMap::new();
    map.insert("A".to_string(), "1".to_string());
    map.insert("B".to_string(), "2".to_string());

    assert_eq!(env.to_map(), map);
    assert_eq!(env.iter().collect::<Vec<_>>(), vec![("A", "1"), ("B", "2")]);
}

#[test]
fn test_process_env_roundtrip() {
    let mut env = ProcessEnv;
    env.set("PATCHENV_UNIT_PROCESS_ENV", "unit value").unwrap();

    assert_eq!(
        env.get("PATCHENV_UNIT_PROCESS_ENV").as_deref(),
        Some(OsStr::new("unit value"))
    );
    assert_eq!(
        std::env::var("PATCHENV_UNIT_PROCESS_ENV").as_deref(),
        Ok("unit value")
    );
}

#[test]
fn test_process_env_rejects_without_panicking() {
    let mut env = ProcessEnv;
    assert!(env.set("PATCHENV=BAD", "x").is_err());
    assert!(env.set("PATCHENV_UNIT_NUL", "a\0b").is_err());
    assert_eq!(env.get("PATCHENV_UNIT_NUL"), None);
}

#[cfg(unix)]
#[test]
fn test_process_env_reads_non_unicode_values() {
    use std::os::unix::ffi::OsStrExt;

    let raw = OsStr::from_bytes(b"echo ok #\xff");
    // SAFETY: the name is unique to this test and nothing else in the test
    // binary reads the environment through C.
    unsafe { std::env::set_var("PATCHENV_UNIT_NON_UNICODE", raw) };

    assert_eq!(
        ProcessEnv.get("PATCHENV_UNIT_NON_UNICODE").as_deref(),
        Some(raw),
        "a non-Unicode value is not reported as unset"
    );
}
