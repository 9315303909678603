// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build arguments.
//!
//! # Flag Effects
//!
//! ```text
//! --backend ninja           configure + ninja
//! --backend vs20xx          configure + [xp patch] + msbuild radare2.sln /m
//!   --project               stop after generating the solution
//!   --xp                    not with ninja or vs2019
//! --options K=V...          -DK=V for meson; R2_* keys also move install paths
//! --webui / --local         -Duse_webui=true / -Dlocal=true
//! --asan [LIST]             -fsanitize=LIST in CFLAGS (and LDFLAGS)
//! ```

use clap::{ArgAction, Args};
use std::path::PathBuf;

use crate::config::types::Backend;
use crate::core::env::sanitizer::DEFAULT_SANITIZERS;

/// Default build directory, relative to the source root.
pub const DEFAULT_BUILD_DIR: &str = "build";

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Build backend.
    #[arg(long, value_enum, default_value_t = Backend::Ninja)]
    pub backend: Backend,

    /// Link dynamically (shared library) rather than statically.
    #[arg(long)]
    pub shared: bool,

    /// Set the build as Release (remove debug info).
    #[arg(long)]
    pub release: bool,

    /// Create a Visual Studio project and do not build.
    #[arg(long)]
    pub project: bool,

    /// Add support for Windows XP.
    #[arg(long)]
    pub xp: bool,

    /// Add support for local/side-by-side installation (sets rpath if needed).
    #[arg(long)]
    pub local: bool,

    /// Build and install the web UIs.
    #[arg(long)]
    pub webui: bool,

    /// Project installation prefix.
    #[arg(long, value_name = "PATH")]
    pub prefix: Option<PathBuf>,

    /// Build directory, relative to the source root.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BUILD_DIR)]
    pub dir: PathBuf,

    /// Meson options as KEY=VALUE; R2_* path keys also change install paths.
    #[arg(long, value_name = "KEY=VALUE", num_args = 1.., action = ArgAction::Append)]
    pub options: Vec<String>,

    /// Build with sanitizers.
    #[arg(
        long,
        value_name = "SANITIZERS",
        num_args = 0..=1,
        default_missing_value = DEFAULT_SANITIZERS
    )]
    pub asan: Option<String>,

    /// git pull before building.
    #[arg(long)]
    pub pull: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            backend: Backend::Ninja,
            shared: false,
            release: false,
            project: false,
            xp: false,
            local: false,
            webui: false,
            prefix: None,
            dir: PathBuf::from(DEFAULT_BUILD_DIR),
            options: Vec::new(),
            asan: None,
            pull: false,
        }
    }
}

impl BuildArgs {
    /// Meson `-D` options: every `--options` entry, then the feature flags.
    #[must_use]
    pub fn meson_options(&self) -> Vec<String> {
        let mut options: Vec<String> = self.options.iter().map(|o| format!("-D{o}")).collect();
        if self.webui {
            options.push("-Duse_webui=true".to_string());
        }
        if self.local {
            options.push("-Dlocal=true".to_string());
        }
        options
    }
}
