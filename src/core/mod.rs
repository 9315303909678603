// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env     platform   process
//!     |         |          |
//!   Env      Platform   Builder
//!   asan     (host OS)  Output
//! ```

pub mod env;
pub mod platform;
pub mod process;
