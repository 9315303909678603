// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   walk:  expand_glob(), find_files(), split_glob()
//!   copy:  copy_file(), copy_into(), copy_tree(), move_into()
//! ```

pub mod fs;
