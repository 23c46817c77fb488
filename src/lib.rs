// patchenv: Patch the process environment from a command's output
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! Lets a process compute part of its own environment at startup: the
//! command in `PATCH_ENV_COMMAND` is run and every `KEY=value` line it
//! prints is set in this process.
//!
//! ```no_run
//! fn main() -> Result<(), patchenv::PatchEnvError> {
//!     patchenv::patch()?;
//!     // AWS_ACCESS_KEY_ID etc. are now visible to the rest of the program
//!     Ok(())
//! }
//! ```
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd (handlers)
//!                |              exec / print
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          patch            |
//!              |  control var -> command   |
//!              |  -> parse -> apply        |
//!              '------+-------------+------'
//!                     |             |
//!                     v             v
//!                  config      core process
//!                 var names    shell / direct
//!
//!   +-----------------------------------------+
//!   |  core   env (EnvStore), process         |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod patch;

pub use config::PatchConfig;
pub use error::{PatchEnvError, PatchResult};
pub use patch::{PatchReport, Patcher, patch, patch_async};
