// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The operations the Build Driver needs from the outside world.

use super::{BoxFuture, GitTool, MesonTool, MsBuildTool, NinjaTool, Tool, ToolContext};
use crate::error::Result;

/// Configure / build / build-project / pull, each awaited to completion.
pub trait Toolchain: Send + Sync {
    /// Creates and populates a build directory.
    fn configure<'a>(&'a self, meson: &'a MesonTool) -> BoxFuture<'a, Result<()>>;

    /// Runs the fast backend in a configured directory.
    fn build<'a>(&'a self, ninja: &'a NinjaTool) -> BoxFuture<'a, Result<()>>;

    /// Builds a generated Visual Studio solution.
    fn build_project<'a>(&'a self, msbuild: &'a MsBuildTool) -> BoxFuture<'a, Result<()>>;

    /// Updates the source tree.
    fn pull<'a>(&'a self, git: &'a GitTool) -> BoxFuture<'a, Result<()>>;
}

/// Runs every tool as a child process.
#[derive(Debug, Clone)]
pub struct ProcessToolchain {
    ctx: ToolContext,
}

impl ProcessToolchain {
    #[must_use]
    pub const fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }
}

impl Toolchain for ProcessToolchain {
    fn configure<'a>(&'a self, meson: &'a MesonTool) -> BoxFuture<'a, Result<()>> {
        meson.run(&self.ctx)
    }

    fn build<'a>(&'a self, ninja: &'a NinjaTool) -> BoxFuture<'a, Result<()>> {
        ninja.run(&self.ctx)
    }

    fn build_project<'a>(&'a self, msbuild: &'a MsBuildTool) -> BoxFuture<'a, Result<()>> {
        msbuild.run(&self.ctx)
    }

    fn pull<'a>(&'a self, git: &'a GitTool) -> BoxFuture<'a, Result<()>> {
        git.run(&self.ctx)
    }
}
