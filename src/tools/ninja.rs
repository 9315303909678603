// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ninja build step: `ninja -C <builddir> [targets...]`.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct NinjaTool {
    build_dir: PathBuf,
    targets: Vec<String>,
}

impl NinjaTool {
    #[must_use]
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            targets: Vec::new(),
        }
    }

    /// Restricts the build to the named targets.
    #[must_use]
    pub fn targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = targets.into_iter().map(Into::into).collect();
        self
    }
}

impl Tool for NinjaTool {
    fn name(&self) -> &'static str {
        "ninja"
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec!["-C".to_string(), self.build_dir.display().to_string()];
        args.extend(self.targets.iter().cloned());
        args
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if ctx.is_dry_run() {
                info!(args = ?self.args(), "[dry-run] Would build with ninja");
                return Ok(());
            }

            info!(build_dir = %self.build_dir.display(), "building with ninja");
            ProcessBuilder::new(ctx.config().tools.ninja())
                .args(self.args())
                .env(ctx.env().clone())
                .inherit_stdio()
                .run()
                .await
                .context("ninja build failed")?;
            Ok(())
        })
    }
}
