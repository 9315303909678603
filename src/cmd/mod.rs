// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! --alias --> alias::run_alias_command() (exit 0, nothing built)
//! install::plan_install() --> build::run_build_command() --> install::run_install()
//! ```

pub mod alias;
pub mod build;
pub mod install;
