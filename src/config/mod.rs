// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. r2-meson.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. R2MESON_* env vars
//! 5. command-line flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! R2MESON_GLOBAL__DRY=true           → global.dry = true
//! R2MESON_TOOLS__MESON=/opt/meson    → tools.meson = "/opt/meson"
//! R2MESON_PATHS__ROOT=/src/radare2   → paths.root = "/src/radare2"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub tools: ToolsConfig,
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use r2_meson::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("r2-meson.toml")
    ///     .with_env_prefix("R2MESON")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the
    /// `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) for invalid path
    /// category overrides.
    pub fn validate(&self) -> Result<()> {
        self.paths.categories()?;
        Ok(())
    }
}
