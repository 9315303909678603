// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use crate::error::Result;

/// Shell alias that runs `exe` as `m`.
#[must_use]
pub fn alias_line(exe: &Path) -> String {
    format!("alias m=\"{}\"", exe.display())
}

/// Prints the alias for the running executable.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn run_alias_command() -> Result<()> {
    let exe = std::env::current_exe()?;
    println!("{}", alias_line(&exe));
    Ok(())
}
