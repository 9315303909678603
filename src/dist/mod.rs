// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Distribution assembly.
//!
//! ```text
//! DistributionManifest (templates)
//!   MakeDir / CopyGlob / CopyTree / MoveGlob / WriteFile
//!        |
//!        | resolve(&TemplateRegistry)   every path, before any I/O
//!        v
//! DistributionManifest<PathBuf>
//!        |
//!        | Assembler::execute()         strictly in order
//!        v
//! install tree + AssemblyReport
//! ```
//!
//! The manifest is not transactional: a failure part way leaves whatever
//! was already created in place.

mod assembler;
mod windows;


use std::path::PathBuf;

use crate::error::TemplateError;
use crate::template::TemplateRegistry;

pub use assembler::{Assembler, AssemblyReport};
pub use windows::{LAUNCHER_SCRIPT, windows_manifest};

/// One filesystem operation. `P` is a template `String` before resolution
/// and a `PathBuf` after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistOp<P = String> {
    /// Create a directory and its parents; the directory must not exist.
    MakeDir { path: P },
    /// Copy every file matching `pattern` into `dest`.
    CopyGlob {
        pattern: P,
        dest: P,
        exclude: Vec<String>,
    },
    /// Copy the tree at `src` to the new directory `dest`.
    CopyTree {
        src: P,
        dest: P,
        exclude: Vec<String>,
    },
    /// Move every file matching `pattern` into `dest`.
    MoveGlob { pattern: P, dest: P },
    /// Write a generated file.
    WriteFile { path: P, contents: String },
}

impl DistOp {
    /// Resolves every template in this operation.
    ///
    /// # Errors
    ///
    /// Propagates [`TemplateError`] from the registry.
    pub fn resolve(&self, registry: &TemplateRegistry) -> Result<DistOp<PathBuf>, TemplateError> {
        let path = |template: &str| registry.resolve_path(template);
        Ok(match self {
            Self::MakeDir { path: p } => DistOp::MakeDir { path: path(p)? },
            Self::CopyGlob {
                pattern,
                dest,
                exclude,
            } => DistOp::CopyGlob {
                pattern: path(pattern)?,
                dest: path(dest)?,
                exclude: exclude.clone(),
            },
            Self::CopyTree { src, dest, exclude } => DistOp::CopyTree {
                src: path(src)?,
                dest: path(dest)?,
                exclude: exclude.clone(),
            },
            Self::MoveGlob { pattern, dest } => DistOp::MoveGlob {
                pattern: path(pattern)?,
                dest: path(dest)?,
            },
            Self::WriteFile { path: p, contents } => DistOp::WriteFile {
                path: path(p)?,
                contents: contents.clone(),
            },
        })
    }
}

/// Ordered list of operations that assemble an install tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionManifest<P = String> {
    ops: Vec<DistOp<P>>,
}

impl<P> DistributionManifest<P> {
    #[must_use]
    pub fn ops(&self) -> &[DistOp<P>] {
        &self.ops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl DistributionManifest {
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn push(&mut self, op: DistOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn make_dir(&mut self, path: impl Into<String>) -> &mut Self {
        self.push(DistOp::MakeDir { path: path.into() })
    }

    pub fn copy_glob(&mut self, pattern: impl Into<String>, dest: impl Into<String>) -> &mut Self {
        self.push(DistOp::CopyGlob {
            pattern: pattern.into(),
            dest: dest.into(),
            exclude: Vec::new(),
        })
    }

    pub fn copy_tree(&mut self, src: impl Into<String>, dest: impl Into<String>) -> &mut Self {
        self.copy_tree_excluding(src, dest, Vec::<String>::new())
    }

    /// Like [`copy_tree`](Self::copy_tree), skipping entries whose name
    /// matches any of `exclude` at every depth.
    pub fn copy_tree_excluding<I, S>(
        &mut self,
        src: impl Into<String>,
        dest: impl Into<String>,
        exclude: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(DistOp::CopyTree {
            src: src.into(),
            dest: dest.into(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        })
    }

    pub fn move_glob(&mut self, pattern: impl Into<String>, dest: impl Into<String>) -> &mut Self {
        self.push(DistOp::MoveGlob {
            pattern: pattern.into(),
            dest: dest.into(),
        })
    }

    pub fn write_file(&mut self, path: impl Into<String>, contents: impl Into<String>) -> &mut Self {
        self.push(DistOp::WriteFile {
            path: path.into(),
            contents: contents.into(),
        })
    }

    /// Resolves the whole manifest so that a bad template fails before any
    /// filesystem change.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TemplateError`].
    pub fn resolve(
        &self,
        registry: &TemplateRegistry,
    ) -> Result<DistributionManifest<PathBuf>, TemplateError> {
        let ops = self
            .ops
            .iter()
            .map(|op| op.resolve(registry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DistributionManifest { ops })
    }
}
