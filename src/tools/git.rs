// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git pull` in the source tree before building.
//!
//! A failed pull is logged as a warning and the build goes on with the
//! tree as it is.

use std::path::PathBuf;

use tracing::{info, warn};

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct GitTool {
    repo: PathBuf,
}

impl GitTool {
    #[must_use]
    pub fn pull(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }
}

impl Tool for GitTool {
    fn name(&self) -> &'static str {
        "git"
    }

    fn args(&self) -> Vec<String> {
        vec!["pull".to_string()]
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            if ctx.is_dry_run() {
                info!(repo = %self.repo.display(), "[dry-run] Would pull with git");
                return Ok(());
            }

            info!(repo = %self.repo.display(), "pulling");
            let pulled = ProcessBuilder::new(ctx.config().tools.git())
                .args(self.args())
                .cwd(&self.repo)
                .env(ctx.env().clone())
                .capture_stdout()
                .run()
                .await;

            match pulled {
                Ok(output) => {
                    let summary = output.stdout().lines().last().unwrap_or_default();
                    info!(repo = %self.repo.display(), summary, "pulled");
                }
                Err(e) => {
                    warn!(
                        repo = %self.repo.display(),
                        error = %format!("{e:#}"),
                        "git pull failed, continuing"
                    );
                }
            }
            Ok(())
        })
    }
}
