// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process spawning with fully captured output.
//!
//! ```text
//! ProcessBuilder::shell("/bin/zsh", "-c", cmd)
//! ProcessBuilder::from_command_line(cmd)     (split + PATH lookup)
//!   .run_blocking()  --> std::process::Command
//!   .run().await     --> tokio::process::Command
//!       stdin: null, stdout/stderr: piped, buffered whole
//!       --> ProcessOutput { status, stdout, stderr }
//! ```

pub mod builder;
mod runner;
