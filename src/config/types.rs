// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, ToolsConfig, PathsConfig
//! Backend: ninja (fast) | vs2015 | vs2017 | vs2019
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::process::builder::ProcessBuilder;
use crate::logging::LogLevel;

/// Build backend passed to `meson --backend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Ninja, the fast backend.
    #[default]
    #[value(name = "ninja", alias = "fast")]
    Ninja,
    #[value(name = "vs2015", alias = "vs-2015")]
    Vs2015,
    #[value(name = "vs2017", alias = "vs-2017")]
    Vs2017,
    #[value(name = "vs2019", alias = "vs-2019")]
    Vs2019,
}

impl Backend {
    /// Name understood by `meson --backend`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ninja => "ninja",
            Self::Vs2015 => "vs2015",
            Self::Vs2017 => "vs2017",
            Self::Vs2019 => "vs2019",
        }
    }

    #[must_use]
    pub const fn is_fast(self) -> bool {
        matches!(self, Self::Ninja)
    }

    /// The newest Visual Studio backend, which has no legacy toolset.
    #[must_use]
    pub const fn is_newest_ide(self) -> bool {
        matches!(self, Self::Vs2019)
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would be done without spawning tools or touching files.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Paths to external tools. An empty path means "look it up in PATH".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub meson: PathBuf,
    pub ninja: PathBuf,
    pub msbuild: PathBuf,
    pub git: PathBuf,
}

impl ToolsConfig {
    #[must_use]
    pub fn meson(&self) -> PathBuf {
        resolve_tool(&self.meson, "meson")
    }

    #[must_use]
    pub fn ninja(&self) -> PathBuf {
        resolve_tool(&self.ninja, "ninja")
    }

    #[must_use]
    pub fn msbuild(&self) -> PathBuf {
        resolve_tool(&self.msbuild, "msbuild")
    }

    #[must_use]
    pub fn git(&self) -> PathBuf {
        resolve_tool(&self.git, "git")
    }
}

/// Returns the configured path, or the PATH lookup of `name`.
///
/// An unresolvable name is returned bare so that the spawn error names it.
fn resolve_tool(configured: &Path, name: &str) -> PathBuf {
    if configured.as_os_str().is_empty() {
        ProcessBuilder::find(name).unwrap_or_else(|| PathBuf::from(name))
    } else {
        configured.to_path_buf()
    }
}
