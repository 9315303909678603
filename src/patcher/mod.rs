// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Legacy (Windows XP) platform toolset patching.
//!
//! ```text
//! <builddir>/REGEN.vcxproj
//!   <PlatformToolset>v140</PlatformToolset>
//!        |
//!        | ends with "_xp"? --> Skipped
//!        v
//! <builddir>/**/*.vcxproj:  "v140" --> "v140_xp"  (in place)
//! ```
//!
//! A missing project file or toolset element is an error; there is no
//! fallback.

use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::Regex;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{PatchError, Result};
use crate::utility::fs::io_error;
use crate::utility::fs::walk::find_files;

/// Project file the toolset is read from.
pub const REGEN_PROJECT: &str = "REGEN.vcxproj";

/// Suffix marking an XP-compatible toolset.
pub const LEGACY_SUFFIX: &str = "_xp";

const PLATFORM_TOOLSET: &str = r"<PlatformToolset>(.*)</PlatformToolset>";

/// What [`patch_legacy_toolset`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The toolset already targets the legacy platform.
    Skipped { toolset: String },
    /// Every project file was rewritten from `from` to `to`.
    Patched {
        from: String,
        to: String,
        files: Vec<PathBuf>,
    },
}

/// Extracts the platform toolset from a project file's contents.
///
/// # Errors
///
/// Returns an error if the toolset pattern fails to compile.
pub fn extract_toolset(project: &str) -> Result<Option<&str>> {
    let regex = Regex::new(PLATFORM_TOOLSET).context("failed to compile toolset regex")?;
    Ok(regex
        .captures(project)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str()))
}

/// Appends the legacy suffix to the toolset of every generated project
/// under `build_dir`.
///
/// # Errors
///
/// - [`PatchError::ProjectMissing`] if `REGEN.vcxproj` cannot be read.
/// - [`PatchError::ToolsetNotFound`] if it has no `<PlatformToolset>`.
/// - I/O errors while rewriting project files.
pub async fn patch_legacy_toolset(build_dir: &Path, dry_run: bool) -> Result<PatchOutcome> {
    info!(build_dir = %build_dir.display(), "applying legacy toolset");

    let regen = build_dir.join(REGEN_PROJECT);
    let contents = fs::read_to_string(&regen)
        .await
        .map_err(|_| PatchError::ProjectMissing {
            path: regen.display().to_string(),
        })?;
    let toolset = extract_toolset(&contents)?.ok_or_else(|| PatchError::ToolsetNotFound {
        path: regen.display().to_string(),
    })?;

    if toolset.ends_with(LEGACY_SUFFIX) {
        warn!(toolset, "skipping {}", build_dir.display());
        return Ok(PatchOutcome::Skipped {
            toolset: toolset.to_string(),
        });
    }

    let from = toolset.to_string();
    let to = format!("{from}{LEGACY_SUFFIX}");
    debug!(from = %from, to = %to, "translating toolset");

    let files = find_files(build_dir, "**/*.vcxproj")?;
    for file in &files {
        if dry_run {
            info!(file = %file.display(), "[dry-run] Would patch toolset");
            continue;
        }
        let text = fs::read_to_string(file).await.map_err(io_error(file))?;
        fs::write(file, text.replace(&from, &to))
            .await
            .map_err(io_error(file))?;
        debug!(file = %file.display(), "patched");
    }

    Ok(PatchOutcome::Patched { from, to, files })
}

#[cfg(test)]
mod tests;
