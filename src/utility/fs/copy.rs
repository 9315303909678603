// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs::FileTimes;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tracing::{debug, trace};
use wax::{Glob, Program};

use super::io_error;
use crate::error::{FsError, Result};

/// Shell-style name patterns matched against a single path component.
#[derive(Debug, Default)]
pub struct NameFilter {
    globs: Vec<Glob<'static>>,
}

impl NameFilter {
    /// Compiles the given patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid glob.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let globs = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Glob::new(p)
                    .map(Glob::into_owned)
                    .map_err(|e| anyhow::anyhow!("invalid exclude pattern '{p}': {e}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { globs })
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.globs.iter().any(|g| g.is_match(Path::new(name)))
    }
}

/// Copies one file, keeping its permissions and, where the platform allows
/// it, its timestamps.
///
/// # Errors
///
/// Returns an error if the source cannot be read or the destination written.
pub async fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).await.with_context(|| {
        format!("failed to copy {} to {}", src.display(), dst.display())
    })?;

    if let Err(e) = preserve_times(src, dst).await {
        trace!(path = %dst.display(), error = %e, "timestamps not preserved");
    }

    debug!(src = %src.display(), dst = %dst.display(), "copied");
    Ok(())
}

async fn preserve_times(src: &Path, dst: &Path) -> std::io::Result<()> {
    let meta = fs::metadata(src).await?;
    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }

    let file = fs::OpenOptions::new().write(true).open(dst).await?;
    file.into_std().await.set_times(times)
}

/// Target path for placing `src` at `dest`.
///
/// An existing directory receives the file under its own name; anything
/// else is the new file path.
fn placement(src: &Path, dest: &Path) -> PathBuf {
    match src.file_name() {
        Some(name) if dest.is_dir() => dest.join(name),
        _ => dest.to_path_buf(),
    }
}

/// Copies a file into a directory, or onto a file path when `dest` is not
/// an existing directory.
///
/// # Errors
///
/// Returns an error if the copy fails.
pub async fn copy_into(src: &Path, dest: &Path) -> Result<PathBuf> {
    let target = placement(src, dest);
    copy_file(src, &target).await?;
    Ok(target)
}

/// Moves a file into a directory, or onto a file path.
///
/// Falls back to copy and remove when a rename is not possible (different
/// volumes).
///
/// # Errors
///
/// Returns an error if neither rename nor copy succeeds.
pub async fn move_into(src: &Path, dest: &Path) -> Result<PathBuf> {
    let target = placement(src, dest);
    if fs::rename(src, &target).await.is_err() {
        copy_file(src, &target).await?;
        fs::remove_file(src).await.map_err(io_error(src))?;
    }
    debug!(src = %src.display(), dst = %target.display(), "moved");
    Ok(target)
}

/// Recursively copies `src` to a new directory `dst`.
///
/// Any entry whose name matches `exclude` is skipped, at every depth; an
/// excluded directory is not descended into.
///
/// # Errors
///
/// - [`FsError::NotFound`] if `src` is not a directory.
/// - [`FsError::AlreadyExists`] if `dst` exists.
/// - I/O errors while copying.
pub async fn copy_tree(src: &Path, dst: &Path, exclude: &NameFilter) -> Result<()> {
    if !src.is_dir() {
        return Err(FsError::NotFound(src.display().to_string()).into());
    }
    if dst.exists() {
        return Err(FsError::AlreadyExists(dst.display().to_string()).into());
    }
    copy_tree_inner(src, dst, exclude).await
}

async fn copy_tree_inner(src: &Path, dst: &Path, exclude: &NameFilter) -> Result<()> {
    fs::create_dir_all(dst).await.map_err(io_error(dst))?;

    let mut entries = fs::read_dir(src).await.map_err(io_error(src))?;
    while let Some(entry) = entries.next_entry().await.map_err(io_error(src))? {
        let name = entry.file_name();
        if exclude.matches(&name.to_string_lossy()) {
            trace!(path = %entry.path().display(), "excluded");
            continue;
        }

        let src_path = entry.path();
        let dst_path = dst.join(&name);
        if entry.file_type().await.map_err(io_error(&src_path))?.is_dir() {
            Box::pin(copy_tree_inner(&src_path, &dst_path, exclude)).await?;
        } else {
            copy_file(&src_path, &dst_path).await?;
        }
    }
    Ok(())
}
