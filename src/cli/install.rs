// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Args)]
pub struct InstallArgs {
    /// Install after building. Windows needs the installation directory,
    /// which must not exist yet.
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub install: Option<Option<PathBuf>>,
}

impl InstallArgs {
    #[must_use]
    pub const fn requested(&self) -> bool {
        self.install.is_some()
    }

    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.install.as_ref()?.as_deref()
    }
}
