// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use flume::unbounded;
use ignore::WalkBuilder;
use wax::{Glob, Program};

use crate::error::Result;

/// Characters that start a glob construct in a path component.
const GLOB_CHARS: &[char] = &['*', '?', '[', '{', '<'];

/// A walker that sees every file: build trees are rarely clean git trees,
/// so hidden entries are included and ignore files are not consulted.
fn build_walker(root: &Path, max_depth: Option<usize>) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder.max_depth(max_depth).standard_filters(false);
    builder
}

/// Walks `root` in parallel and returns the files whose path relative to
/// `root` matches `glob`, sorted.
fn walk_matching(root: &Path, glob: &Glob<'_>, max_depth: Option<usize>) -> Vec<PathBuf> {
    let (tx, rx) = unbounded::<PathBuf>();

    build_walker(root, max_depth).build_parallel().run(|| {
        let tx = tx.clone();
        Box::new(move |entry_result| {
            match entry_result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && let Ok(rel_path) = entry.path().strip_prefix(root)
                        && glob.is_match(rel_path)
                    {
                        let _ = tx.send(entry.path().to_path_buf());
                    }
                }
                Err(e) => tracing::warn!(error = %e, "walk error"),
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<PathBuf> = rx.iter().collect();
    files.sort();
    files
}

fn compile(pattern: &str) -> Result<Glob<'_>> {
    Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))
}

/// Finds files under `root` matching a glob relative to it (e.g. `**/*.vcxproj`).
///
/// # Errors
///
/// Returns an error if the root directory does not exist or the glob
/// pattern is invalid.
pub fn find_files<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }
    let glob = compile(pattern)?;
    Ok(walk_matching(root, &glob, None))
}

/// Splits a pattern into its literal directory prefix and the glob rest.
///
/// Returns `None` for the rest when the pattern contains no glob syntax.
#[must_use]
pub fn split_glob(pattern: &str) -> (PathBuf, Option<String>) {
    let normalized = if cfg!(windows) {
        pattern.replace('\\', "/")
    } else {
        pattern.to_string()
    };

    let components: Vec<&str> = normalized.split('/').collect();
    let Some(first_glob) = components.iter().position(|c| c.contains(GLOB_CHARS)) else {
        return (PathBuf::from(pattern), None);
    };

    let prefix = components[..first_glob].join("/");
    let rest = components[first_glob..].join("/");
    let root = match prefix.as_str() {
        "" if normalized.starts_with('/') => PathBuf::from("/"),
        "" => PathBuf::from("."),
        _ => PathBuf::from(prefix),
    };
    (root, Some(rest))
}

/// Expands a filesystem glob into the files it matches, sorted.
///
/// `*` never crosses a directory boundary; only a `**` segment makes the
/// match recursive. A pattern without glob syntax yields the path itself
/// when it exists. Nothing matching is not an error.
///
/// # Errors
///
/// Returns an error if the glob part of the pattern is invalid.
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let (root, rest) = split_glob(pattern);
    let Some(rest) = rest else {
        return Ok(if root.exists() { vec![root] } else { Vec::new() });
    };
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let max_depth = if rest.split('/').any(|c| c.contains("**")) {
        None
    } else {
        Some(rest.split('/').count())
    };

    let glob = compile(&rest)?;
    Ok(walk_matching(&root, &glob, max_depth))
}
