// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install path categories.
//!
//! ```text
//! <install root>/
//!   lib/            R2_LIBDIR
//!   include/        R2_INCDIR
//!   share/          R2_DATDIR, R2_SDB
//!     www/          R2_WWWROOT
//!     zigns/        R2_ZIGNS
//!     cons/         R2_THEMES
//!     doc/          R2_FORTUNES
//!     flag/         R2_FLAGS
//!     hud/          R2_HUD
//! ```
//!
//! Defaults may be overridden from `[paths.categories]` or with
//! `--options KEY=VALUE`; keys are matched case-insensitively and values
//! must be relative.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::template::TemplateRegistry;

/// Path category defaults, relative to the install root.
pub const DEFAULT_CATEGORIES: [(&str, &str); 10] = [
    ("R2_LIBDIR", "lib"),
    ("R2_INCDIR", "include"),
    ("R2_DATDIR", "share"),
    ("R2_WWWROOT", "{R2_DATDIR}/www"),
    ("R2_SDB", "{R2_DATDIR}"),
    ("R2_ZIGNS", "{R2_DATDIR}/zigns"),
    ("R2_THEMES", "{R2_DATDIR}/cons"),
    ("R2_FORTUNES", "{R2_DATDIR}/doc"),
    ("R2_FLAGS", "{R2_DATDIR}/flag"),
    ("R2_HUD", "{R2_DATDIR}/hud"),
];

/// `[paths]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Source tree root (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Path category overrides, e.g. `R2_LIBDIR = "lib64"`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, String>,
}

impl PathsConfig {
    /// Source root, falling back to the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is configured and the current directory
    /// cannot be determined.
    pub fn root(&self) -> std::io::Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir(),
        }
    }

    /// Category table with the configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown keys or absolute values.
    pub fn categories(&self) -> Result<PathCategories, ConfigError> {
        let mut categories = PathCategories::default();
        for (key, value) in &self.categories {
            if !categories.set(key, value)? {
                return Err(ConfigError::InvalidValue {
                    section: "paths.categories".to_string(),
                    key: key.clone(),
                    message: "not a path category".to_string(),
                });
            }
        }
        Ok(categories)
    }
}

/// Install subpaths keyed by category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCategories {
    entries: BTreeMap<String, String>,
}

impl Default for PathCategories {
    fn default() -> Self {
        Self {
            entries: DEFAULT_CATEGORIES
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl PathCategories {
    #[must_use]
    pub fn is_category(key: &str) -> bool {
        let key = key.to_ascii_uppercase();
        DEFAULT_CATEGORIES.iter().any(|(name, _)| *name == key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overrides a category. Returns `false` when `key` is not a category.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelativePathRequired`] for absolute values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        let key = key.to_ascii_uppercase();
        if !Self::is_category(&key) {
            return Ok(false);
        }
        if is_absolute_like(value) {
            return Err(ConfigError::RelativePathRequired(format!("{key}={value}")));
        }
        self.entries.insert(key, normalize_relative(value));
        Ok(true)
    }

    /// Applies a `KEY=VALUE` option. Options that are not path categories
    /// are accepted and left alone.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidOption`] when there is no `=`.
    /// - [`ConfigError::RelativePathRequired`] for absolute category values.
    pub fn apply_option(&mut self, option: &str) -> Result<bool, ConfigError> {
        let (key, value) = split_option(option)?;
        self.set(key, value)
    }

    /// Seeds a template registry with every category.
    #[must_use]
    pub fn to_registry(&self) -> TemplateRegistry {
        self.iter().collect()
    }
}

/// Splits `KEY=VALUE` at the first `=`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOption`] when there is no `=`.
pub fn split_option(option: &str) -> Result<(&str, &str), ConfigError> {
    option
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidOption(option.to_string()))
}

/// Absolute on either Unix or Windows conventions.
fn is_absolute_like(value: &str) -> bool {
    let bytes = value.as_bytes();
    let drive = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    value.starts_with(['/', '\\']) || drive || Path::new(value).is_absolute()
}

/// Normalizes a relative path: drops `.` and empty segments, folds `..`,
/// and joins with `/`.
#[must_use]
pub fn normalize_relative(value: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in value.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else {
                    parts.push("..");
                }
            }
            _ => parts.push(segment),
        }
    }
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// Reads the project version from `configure.acr`: the second token of
/// its second line.
#[must_use]
pub fn read_version(root: &Path) -> Option<String> {
    let content = std::fs::read_to_string(root.join("configure.acr")).ok()?;
    content
        .lines()
        .nth(1)?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}
