// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("meson")
//!   .args() .cwd() .env() .inherit_stdio()
//!   .run()
//!       --> tokio::process::Command
//!           stream or inherit stdout/stderr
//!       --> ProcessOutput { exit_code, stdout, stderr }
//!           or ProcessError::{SpawnFailed, NonZeroExit}
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
