// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           build / install / alias
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              | TOML+env, path categories |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               tools      patcher    dist
//!           meson/ninja   REGEN.vcx  manifest
//!           msbuild/git   toolsets   assembler
//!                 |                    |
//!                 |               template
//!                 |            {NAME} registry
//!   +-----------------------------------------+
//!   |  core   process, env, platform          |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod dist;
pub mod error;
pub mod logging;
pub mod patcher;
pub mod template;
pub mod tools;
pub mod utility;

#[cfg(test)]
pub(crate) mod test_utils;
