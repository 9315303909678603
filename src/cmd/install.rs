// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation.
//!
//! ```text
//! plan_install()     before the build: needs DIR on Windows, DIR must be new
//! run_install():
//!   Windows   registry + DIST --> windows_manifest() --> Assembler
//!   elsewhere warning only
//! ```

use std::path::PathBuf;

use tracing::{info, warn};

use super::build::BuildSettings;
use crate::cli::install::InstallArgs;
use crate::core::platform::Platform;
use crate::dist::{Assembler, AssemblyReport, windows_manifest};
use crate::error::{ConfigError, Result};

/// What `--install` will do once the build is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// No `--install`.
    Skip,
    /// Assemble a distribution in this new directory.
    Windows(PathBuf),
    /// Requested on a platform without an install step.
    Unsupported,
}

/// Validates `--install` against the target platform.
///
/// Runs before the build so that a bad destination fails without side
/// effects.
///
/// # Errors
///
/// - [`ConfigError::InstallDirRequired`] on Windows without a directory.
/// - [`ConfigError::InstallDirExists`] when the directory already exists.
pub fn plan_install(
    args: &InstallArgs,
    platform: Platform,
) -> std::result::Result<InstallPlan, ConfigError> {
    if !args.requested() {
        return Ok(InstallPlan::Skip);
    }
    if !platform.is_windows() {
        return Ok(InstallPlan::Unsupported);
    }

    let dir = args.dir().ok_or(ConfigError::InstallDirRequired)?;
    if dir.exists() {
        return Err(ConfigError::InstallDirExists(dir.display().to_string()));
    }
    Ok(InstallPlan::Windows(dir.to_path_buf()))
}

/// Carries out an install plan after a successful build.
///
/// # Errors
///
/// Returns template and filesystem errors from the assembler. The install
/// tree is left as is on failure.
pub async fn run_install(
    plan: &InstallPlan,
    settings: &BuildSettings,
    webui: bool,
) -> Result<Option<AssemblyReport>> {
    match plan {
        InstallPlan::Skip => Ok(None),
        InstallPlan::Unsupported => {
            warn!("install not implemented for this platform");
            Ok(None)
        }
        InstallPlan::Windows(dist) => {
            info!(dist = %dist.display(), "assembling distribution");

            let mut registry = settings.registry();
            registry.insert("DIST", dist.to_string_lossy());

            let manifest = windows_manifest(settings.shared, webui);
            let report = Assembler::new(&registry)
                .dry_run(settings.dry_run)
                .execute(&manifest)
                .await?;

            info!(
                dirs = report.dirs_created,
                files = report.files_copied,
                trees = report.trees_copied,
                "distribution ready"
            );
            Ok(Some(report))
        }
    }
}
