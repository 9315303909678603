// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem primitives used by the distribution assembler and the patcher.
//!
//! ```text
//! walk:  expand_glob()   "<literal prefix>/<glob rest>"
//!                        depth-limited unless the rest contains "**"
//!        find_files()    recursive glob under a root
//! copy:  copy_file()     tokio::fs::copy + timestamps
//!        copy_into()     into a directory, or onto a file path
//!        copy_tree()     recursive, name excludes at every level
//!        move_into()     rename, copy+remove across volumes
//! ```

pub mod copy;
pub mod walk;

#[cfg(test)]
mod tests;

use crate::error::FsError;
use std::path::Path;

/// Wraps an I/O error with the path it happened on.
pub(crate) fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> FsError + '_ {
    move |source| FsError::IoError {
        path: path.display().to_string(),
        source,
    }
}
