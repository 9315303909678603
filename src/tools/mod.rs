// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External build tools.
//!
//! ```text
//! Build Driver --> Toolchain --> Tool --> ProcessBuilder
//!                  configure     MesonTool    meson setup <root> <build> ...
//!                  build         NinjaTool    ninja -C <build> [targets]
//!                  build_project MsBuildTool  msbuild <sln> [params]
//!                  pull          GitTool      git pull
//! ```
//!
//! Every tool honours dry-run by logging `[dry-run] Would ...` instead of
//! spawning. A non-zero exit surfaces as
//! [`ProcessError::NonZeroExit`](crate::error::ProcessError::NonZeroExit).

use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::core::env::{Env, current_env};
use crate::error::Result;

pub mod git;
pub mod meson;
pub mod msbuild;
pub mod ninja;
pub mod toolchain;

pub use git::GitTool;
pub use meson::MesonTool;
pub use msbuild::MsBuildTool;
pub use ninja::NinjaTool;
pub use toolchain::{ProcessToolchain, Toolchain};

/// Context provided to tools during execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    config: Arc<Config>,
    /// Environment handed to every child process.
    env: Env,
    dry_run: bool,
}

impl ToolContext {
    /// Creates a context whose children inherit the current environment.
    #[must_use]
    pub fn new(config: Arc<Config>, dry_run: bool) -> Self {
        Self {
            config,
            env: current_env(),
            dry_run,
        }
    }

    /// Replaces the environment handed to child processes.
    #[must_use]
    pub fn with_env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// An external program invocation.
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "meson", "ninja").
    fn name(&self) -> &str;

    /// Arguments passed to the program, in order.
    fn args(&self) -> Vec<String>;

    /// Runs the tool to completion.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}
