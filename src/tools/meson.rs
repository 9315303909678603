// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Meson configure step.
//!
//! ```text
//! meson setup <root> <builddir>
//!   [--prefix=P] [--backend=B] [--buildtype=release]
//!   --default-library=shared|static
//!   [-DKEY=VALUE ...]
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext};
use crate::config::types::Backend;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Configures a build directory with meson.
#[derive(Debug, Clone, Default)]
pub struct MesonTool {
    source_root: PathBuf,
    build_dir: PathBuf,
    prefix: Option<PathBuf>,
    backend: Option<Backend>,
    release: bool,
    shared: bool,
    options: Vec<String>,
}

impl MesonTool {
    #[must_use]
    pub fn new(source_root: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            build_dir: build_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: Option<PathBuf>) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub const fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub const fn release(mut self, release: bool) -> Self {
        self.release = release;
        self
    }

    #[must_use]
    pub const fn shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    /// Appends raw arguments (already in `-DKEY=VALUE` form).
    #[must_use]
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn build_dir(&self) -> &PathBuf {
        &self.build_dir
    }
}

impl Tool for MesonTool {
    fn name(&self) -> &'static str {
        "meson"
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "setup".to_string(),
            self.source_root.display().to_string(),
            self.build_dir.display().to_string(),
        ];
        if let Some(prefix) = &self.prefix {
            args.push(format!("--prefix={}", prefix.display()));
        }
        if let Some(backend) = self.backend {
            args.push(format!("--backend={backend}"));
        }
        if self.release {
            args.push("--buildtype=release".to_string());
        }
        let library = if self.shared { "shared" } else { "static" };
        args.push(format!("--default-library={library}"));
        args.extend(self.options.iter().cloned());
        args
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if ctx.is_dry_run() {
                info!(args = ?self.args(), "[dry-run] Would configure with meson");
                return Ok(());
            }

            info!(build_dir = %self.build_dir.display(), "configuring with meson");
            ProcessBuilder::new(ctx.config().tools.meson())
                .args(self.args())
                .env(ctx.env().clone())
                .inherit_stdio()
                .run()
                .await
                .context("meson configure failed")?;
            Ok(())
        })
    }
}
