// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests against the real process environment.
//!
//! Each test uses its own control and shell variable names, and every test
//! holds `ENV_LOCK` so only one of them writes the environment at a time.

use std::sync::{Mutex, MutexGuard, PoisonError};

use patchenv::core::env::{EnvStore, ProcessEnv};
use patchenv::patch::{Diagnostics, Patcher};
use patchenv::{PatchConfig, PatchEnvError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn config(test: &str) -> PatchConfig {
    PatchConfig::builder()
        .with_command_var(format!("PATCHENV_IT_{test}_COMMAND"))
        .with_shell_var(format!("PATCHENV_IT_{test}_SHELL"))
        .build()
}

fn set(key: &str, value: &str) {
    ProcessEnv.set(key, value).expect("valid test variable");
}

fn get(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[test]
fn unset_control_variable_is_noop() {
    let _env = lock_env();
    let mut patcher = Patcher::new(config("NOOP"));
    let report = patcher.patch().expect("no-op must succeed");
    assert!(report.is_noop());
}

#[cfg(not(windows))]
#[test]
fn patch_sets_process_variables() {
    let _env = lock_env();
    set(
        "PATCHENV_IT_SET_COMMAND",
        r#"printf '%s\n' 'PATCHENV_IT_SET_FOO=bar' 'PATCHENV_IT_SET_FOO=baz' 'PATCHENV_IT_SET_HINT=values can have spaces and "special chars"' 'NOVALUE' '=novalue' 'PATCHENV_IT_SET_AFTER=ok'"#,
    );
    set("PATCHENV_IT_SET_SHELL", "/bin/sh");
    set("PATCHENV_IT_SET_FOO", "pre-existing");

    let report = Patcher::new(config("SET"))
        .patch()
        .expect("command should succeed");

    assert_eq!(get("PATCHENV_IT_SET_FOO").as_deref(), Some("baz"));
    assert_eq!(
        get("PATCHENV_IT_SET_HINT").as_deref(),
        Some(r#"values can have spaces and "special chars""#)
    );
    assert_eq!(get("PATCHENV_IT_SET_AFTER").as_deref(), Some("ok"));
    assert_eq!(report.malformed(), ["NOVALUE", "=novalue"]);
}

#[cfg(not(windows))]
#[test]
fn patched_variables_reach_child_processes() {
    let _env = lock_env();
    set("PATCHENV_IT_CHILD_COMMAND", "echo PATCHENV_IT_CHILD_TOKEN=secret-123");
    set("PATCHENV_IT_CHILD_SHELL", "/bin/sh");

    Patcher::new(config("CHILD"))
        .patch()
        .expect("command should succeed");

    let output = std::process::Command::new("/bin/sh")
        .args(["-c", "printf %s \"$PATCHENV_IT_CHILD_TOKEN\""])
        .output()
        .expect("sh should run");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "secret-123");
}

#[cfg(not(windows))]
#[test]
fn failing_command_modifies_nothing() {
    let _env = lock_env();
    set(
        "PATCHENV_IT_FAIL_COMMAND",
        "echo PATCHENV_IT_FAIL_LEAK=1; exit 1",
    );
    set("PATCHENV_IT_FAIL_SHELL", "/bin/sh");

    let err = Patcher::new(config("FAIL"))
        .with_diagnostics(Diagnostics::discard())
        .patch()
        .unwrap_err();

    assert!(matches!(err, PatchEnvError::Command(_)));
    assert_eq!(err.command(), Some("echo PATCHENV_IT_FAIL_LEAK=1; exit 1"));
    assert_eq!(get("PATCHENV_IT_FAIL_LEAK"), None);
}

#[cfg(not(windows))]
#[test]
fn direct_invocation_when_shell_unset() {
    let _env = lock_env();
    set(
        "PATCHENV_IT_DIRECT_COMMAND",
        "echo PATCHENV_IT_DIRECT_PIPE=a | tr a b",
    );

    Patcher::new(config("DIRECT"))
        .patch()
        .expect("echo should run directly");

    assert_eq!(
        get("PATCHENV_IT_DIRECT_PIPE").as_deref(),
        Some("a | tr a b")
    );
}

#[cfg(not(windows))]
#[test]
fn async_patch_sets_process_variables() {
    let _env = lock_env();
    set("PATCHENV_IT_ASYNC_COMMAND", "echo PATCHENV_IT_ASYNC_VALUE=1");
    set("PATCHENV_IT_ASYNC_SHELL", "/bin/sh");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime should build");
    runtime
        .block_on(Patcher::new(config("ASYNC")).patch_async())
        .expect("command should succeed");

    assert_eq!(get("PATCHENV_IT_ASYNC_VALUE").as_deref(), Some("1"));
}

#[cfg(unix)]
#[test]
fn non_unicode_command_is_run_not_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _env = lock_env();
    // SAFETY: ENV_LOCK is held and nothing in this binary reads the
    // environment through C.
    unsafe {
        std::env::set_var(
            "PATCHENV_IT_RAW_COMMAND",
            OsStr::from_bytes(b"echo PATCHENV_IT_RAW_VALUE=1 #\xff"),
        );
    }
    set("PATCHENV_IT_RAW_SHELL", "/bin/sh");

    let report = Patcher::new(config("RAW"))
        .patch()
        .expect("command should succeed");

    assert!(!report.is_noop());
    assert_eq!(get("PATCHENV_IT_RAW_VALUE").as_deref(), Some("1"));
}
