// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!          core
//!           |
//!     +-----+------+
//!     v            v
//!    env        process
//!     |            |
//!  EnvStore     Builder
//!  ProcessEnv   Output
//!  Env          run / run_blocking
//! ```

pub mod env;
pub mod process;
