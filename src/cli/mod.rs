// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for r2-meson using clap derive.
//!
//! # Flag Groups
//!
//! ```text
//! r2-meson [global options] [build options] [--install [DIR]] [--alias]
//!
//! global:  --ini --dry --log-level --file-log-level --log-file
//! build:   --backend --shared --release --project --xp --dir --prefix
//!          --options KEY=VALUE... --webui --local --asan [LIST] --pull
//! install: --install [DIR]
//! ```
//!
//! There are no subcommands: every run builds, and installs when asked.

pub mod build;
pub mod global;
pub mod install;


use crate::cli::build::BuildArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::install::InstallArgs;
use clap::Parser;

/// Meson build front end for radare2.
#[derive(Debug, Parser)]
#[command(
    name = "r2-meson",
    author,
    version,
    about = "Meson build front end for radare2",
    long_about = "r2-meson Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Configures radare2 with meson on first use, builds it with\n\
                  ninja or MSBuild and, on Windows, assembles a standalone\n\
                  distribution with --install DIR.",
    after_help = "CONFIG FILES:\n\n\
                  r2-meson reads `r2-meson.toml` from the current directory when\n\
                  present, then every --ini file in order, then R2MESON_*\n\
                  environment variables (e.g. R2MESON_TOOLS__NINJA). Later\n\
                  sources override earlier ones; command-line flags win over all."
)]
pub struct Cli {
    /// Options shared by every run.
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Configure and build options.
    #[command(flatten)]
    pub build: BuildArgs,

    /// Install options.
    #[command(flatten)]
    pub install: InstallArgs,

    /// Show the "m" alias shell command and exit.
    #[arg(long)]
    pub alias: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
