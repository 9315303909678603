// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tracing::{debug, info};

use super::{DistOp, DistributionManifest};
use crate::error::{FsError, Result};
use crate::template::TemplateRegistry;
use crate::utility::fs::copy::{NameFilter, copy_into, copy_tree, move_into};
use crate::utility::fs::io_error;
use crate::utility::fs::walk::expand_glob;

/// Counts of what an assembly run did (or would do, in dry-run mode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub dirs_created: usize,
    pub files_copied: usize,
    pub trees_copied: usize,
    pub files_moved: usize,
    pub files_written: usize,
}

/// Executes distribution manifests against the filesystem.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    registry: &'a TemplateRegistry,
    dry_run: bool,
}

impl<'a> Assembler<'a> {
    #[must_use]
    pub const fn new(registry: &'a TemplateRegistry) -> Self {
        Self {
            registry,
            dry_run: false,
        }
    }

    /// Only log the operations; globs are still expanded.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolves every template in `manifest`, then runs its operations in
    /// order.
    ///
    /// # Errors
    ///
    /// - [`TemplateError`](crate::error::TemplateError) before anything is
    ///   touched when a placeholder cannot be resolved.
    /// - [`FsError::AlreadyExists`] when a directory to create exists.
    /// - [`FsError::AmbiguousTarget`] when several files would land on one
    ///   file path.
    /// - I/O errors from the copy, move and write primitives.
    pub async fn execute(&self, manifest: &DistributionManifest) -> Result<AssemblyReport> {
        let resolved = manifest
            .resolve(self.registry)
            .context("failed to resolve distribution manifest")?;

        let mut report = AssemblyReport::default();
        for op in resolved.ops() {
            self.apply(op, &mut report).await?;
        }

        debug!(?report, "distribution assembled");
        Ok(report)
    }

    async fn apply(&self, op: &DistOp<PathBuf>, report: &mut AssemblyReport) -> Result<()> {
        match op {
            DistOp::MakeDir { path } => {
                self.make_dir(path).await?;
                report.dirs_created += 1;
            }
            DistOp::CopyGlob {
                pattern,
                dest,
                exclude,
            } => {
                let filter = NameFilter::new(exclude)?;
                report.files_copied += self.copy_glob(pattern, dest, &filter).await?;
            }
            DistOp::CopyTree { src, dest, exclude } => {
                let filter = NameFilter::new(exclude)?;
                if self.dry_run {
                    info!("[dry-run] Would copy tree {} to {}", src.display(), dest.display());
                } else {
                    debug!(src = %src.display(), dest = %dest.display(), "copytree");
                    copy_tree(src, dest, &filter).await?;
                }
                report.trees_copied += 1;
            }
            DistOp::MoveGlob { pattern, dest } => {
                report.files_moved += self.move_glob(pattern, dest).await?;
            }
            DistOp::WriteFile { path, contents } => {
                if self.dry_run {
                    info!("[dry-run] Would write {}", path.display());
                } else {
                    debug!(path = %path.display(), "create");
                    fs::write(path, contents).await.map_err(io_error(path))?;
                }
                report.files_written += 1;
            }
        }
        Ok(())
    }

    async fn make_dir(&self, path: &Path) -> Result<()> {
        if self.dry_run {
            info!("[dry-run] Would create directory {}", path.display());
            return Ok(());
        }
        if path.exists() {
            return Err(FsError::AlreadyExists(path.display().to_string()).into());
        }
        debug!(path = %path.display(), "makedirs");
        fs::create_dir_all(path).await.map_err(io_error(path))?;
        Ok(())
    }

    async fn copy_glob(&self, pattern: &Path, dest: &Path, exclude: &NameFilter) -> Result<usize> {
        let files: Vec<PathBuf> = self
            .matching_files(pattern, dest)?
            .into_iter()
            .filter(|file| {
                !file
                    .file_name()
                    .is_some_and(|name| exclude.matches(&name.to_string_lossy()))
            })
            .collect();

        for file in &files {
            if self.dry_run {
                info!("[dry-run] Would copy {} to {}", file.display(), dest.display());
                continue;
            }
            let target = copy_into(file, dest).await?;
            debug!(src = %file.display(), dst = %target.display(), "copy");
        }
        Ok(files.len())
    }

    async fn move_glob(&self, pattern: &Path, dest: &Path) -> Result<usize> {
        let files = self.matching_files(pattern, dest)?;
        for file in &files {
            if self.dry_run {
                info!("[dry-run] Would move {} to {}", file.display(), dest.display());
                continue;
            }
            let target = move_into(file, dest).await?;
            debug!(src = %file.display(), dst = %target.display(), "move");
        }
        Ok(files.len())
    }

    /// Expands `pattern`, refusing several matches for a non-directory
    /// `dest`. Dry runs skip the destination check.
    fn matching_files(&self, pattern: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
        let pattern_str = pattern.to_string_lossy();
        let files = expand_glob(&pattern_str)?;
        if files.is_empty() {
            debug!(pattern = %pattern_str, "no files matched");
        }
        if !self.dry_run && files.len() > 1 && !dest.is_dir() {
            return Err(FsError::AmbiguousTarget {
                pattern: pattern_str.into_owned(),
                dest: dest.display().to_string(),
                count: files.len(),
            }
            .into());
        }
        Ok(files)
    }
}
