// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::logging::LogLevel;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["patchenv", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));

    let alias = Cli::try_parse_from(["patchenv", "-v"]).unwrap();
    assert!(matches!(alias.command, Some(Command::Version)));
}

#[test]
fn test_parse_exec_passes_hyphen_args_through() {
    let cli = Cli::try_parse_from(["patchenv", "exec", "--", "terraform", "plan", "-out", "x"])
        .unwrap();
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec");
    };
    assert_eq!(args.program, "terraform");
    assert_eq!(args.args, ["plan", "-out", "x"]);
}

#[test]
fn test_parse_exec_requires_program() {
    assert!(Cli::try_parse_from(["patchenv", "exec"]).is_err());
}

#[test]
fn test_parse_print_json() {
    let cli = Cli::try_parse_from(["patchenv", "print", "--json"]).unwrap();
    let Some(Command::Print(args)) = cli.command else {
        panic!("expected print");
    };
    assert!(args.json);
}

#[test]
fn test_global_defaults() {
    let cli = Cli::try_parse_from(["patchenv", "print"]).unwrap();
    let config = cli.global.to_patch_config();

    assert_eq!(config.command_var(), "PATCH_ENV_COMMAND");
    assert_eq!(config.shell_var(), "SHELL");
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "patchenv",
        "print",
        "--command-var",
        "CREDS_COMMAND",
        "--shell-var",
        "CREDS_SHELL",
        "-l",
        "4",
        "--log-file",
        "/tmp/patchenv.log",
    ])
    .unwrap();

    let config = cli.global.to_patch_config();
    assert_eq!(config.command_var(), "CREDS_COMMAND");
    assert_eq!(config.shell_var(), "CREDS_SHELL");

    let log = cli.global.to_log_config();
    assert_eq!(log.console_level(), LogLevel::DEBUG);
    assert_eq!(log.file_level(), LogLevel::DEBUG, "file level follows console");
    assert_eq!(log.log_file(), Some(std::path::Path::new("/tmp/patchenv.log")));
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["patchenv", "-l", "6", "print"]).is_err());
}
