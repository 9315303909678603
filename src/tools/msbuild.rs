// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `MSBuild` step for the Visual Studio backends.
//!
//! ```text
//! msbuild <builddir>/radare2.sln /m
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Builds a generated solution or project file.
#[derive(Debug, Clone)]
pub struct MsBuildTool {
    project: PathBuf,
    params: Vec<String>,
}

impl MsBuildTool {
    #[must_use]
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Builds with as many processes as there are cores (`/m`).
    #[must_use]
    pub fn max_cpu_count(self) -> Self {
        self.param("/m")
    }

    #[must_use]
    pub const fn project(&self) -> &PathBuf {
        &self.project
    }
}

impl Tool for MsBuildTool {
    fn name(&self) -> &'static str {
        "msbuild"
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![self.project.display().to_string()];
        args.extend(self.params.iter().cloned());
        args
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if ctx.is_dry_run() {
                info!(args = ?self.args(), "[dry-run] Would build with MSBuild");
                return Ok(());
            }

            info!(project = %self.project.display(), "building with MSBuild");
            ProcessBuilder::new(ctx.config().tools.msbuild())
                .args(self.args())
                .env(ctx.env().clone())
                .inherit_stdio()
                .run()
                .await
                .context("MSBuild build failed")?;
            Ok(())
        })
    }
}
