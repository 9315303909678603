// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.
//!
//! ```text
//! check_arguments()            guards, before anything runs
//! BuildSettings::resolve()     root, build dir, categories, options
//! [--asan]  CFLAGS/LDFLAGS     refused on OpenBSD
//! [--pull]  git pull
//! run_build():
//!   build dir missing?  --> meson setup          (never reconfigures)
//!   ninja               --> ninja -C <build>
//!   vs20xx              --> [xp patch] --> msbuild radare2.sln /m
//!                           (--project stops after configure)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::config::paths::{PathCategories, read_version};
use crate::config::types::Backend;
use crate::core::env::current_env;
use crate::core::env::sanitizer::apply_sanitizers;
use crate::core::platform::Platform;
use crate::error::{ConfigError, Result};
use crate::patcher::patch_legacy_toolset;
use crate::template::TemplateRegistry;
use crate::tools::{
    GitTool, MesonTool, MsBuildTool, NinjaTool, ProcessToolchain, ToolContext, Toolchain,
};

/// Solution generated by the Visual Studio backends.
pub const SOLUTION: &str = "radare2.sln";

/// Default prefix on Windows, inside the build directory.
pub const PRIVATE_PREFIX: &str = "priv_install_dir";

/// Rejects flag combinations the backends cannot honor.
///
/// # Errors
///
/// Returns [`ConfigError::IncompatibleFlags`] for `--project` with ninja and
/// for `--xp` with ninja or the newest Visual Studio.
pub fn check_arguments(args: &BuildArgs) -> std::result::Result<(), ConfigError> {
    let incompatible = |flag: &str| ConfigError::IncompatibleFlags {
        flag: flag.to_string(),
        backend: args.backend.to_string(),
    };

    if args.project && args.backend.is_fast() {
        return Err(incompatible("--project"));
    }
    if args.xp && (args.backend.is_fast() || args.backend.is_newest_ide()) {
        return Err(incompatible("--xp"));
    }
    Ok(())
}

/// Everything a build and a later install need, resolved once from the
/// command line and the configuration.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub root: PathBuf,
    pub build_dir: PathBuf,
    pub backend: Backend,
    pub prefix: Option<PathBuf>,
    pub release: bool,
    pub shared: bool,
    pub project: bool,
    pub xp: bool,
    pub meson_options: Vec<String>,
    pub categories: PathCategories,
    pub version: Option<String>,
    pub dry_run: bool,
}

impl BuildSettings {
    /// Resolves paths and applies path-category overrides: first from
    /// `[paths.categories]`, then from every `--options` entry.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidOption`] for an option without `=`.
    /// - [`ConfigError::RelativePathRequired`] for an absolute category value.
    /// - An I/O error when no root is configured and the current directory
    ///   is unavailable.
    pub fn resolve(
        args: &BuildArgs,
        config: &Config,
        platform: Platform,
        dry_run: bool,
    ) -> Result<Self> {
        let root = config.paths.root()?;
        let build_dir = root.join(&args.dir);

        let mut categories = config.paths.categories()?;
        for option in &args.options {
            if categories.apply_option(option)? {
                debug!(option, "path category override");
            }
        }

        let prefix = match &args.prefix {
            Some(prefix) => Some(prefix.clone()),
            None if platform.is_windows() => Some(build_dir.join(PRIVATE_PREFIX)),
            None => None,
        };

        let version = read_version(&root);
        debug!(root = %root.display(), version = ?version, "source tree");

        Ok(Self {
            build_dir,
            backend: args.backend,
            prefix,
            release: args.release,
            shared: args.shared,
            project: args.project,
            xp: args.xp,
            meson_options: args.meson_options(),
            categories,
            version,
            dry_run,
            root,
        })
    }

    /// Template registry for install paths: categories plus `ROOT`,
    /// `BUILDDIR` and, when known, `R2_VERSION`.
    #[must_use]
    pub fn registry(&self) -> TemplateRegistry {
        let mut registry = self.categories.to_registry();
        registry
            .insert("ROOT", self.root.to_string_lossy())
            .insert("BUILDDIR", self.build_dir.to_string_lossy());
        if let Some(version) = &self.version {
            registry.insert("R2_VERSION", version.as_str());
        }
        registry
    }

    /// The `meson setup` invocation for these settings.
    #[must_use]
    pub fn meson(&self) -> MesonTool {
        MesonTool::new(&self.root, &self.build_dir)
            .prefix(self.prefix.clone())
            .backend(self.backend)
            .release(self.release)
            .shared(self.shared)
            .options(self.meson_options.iter().cloned())
    }
}

/// Configures when needed, then builds with the selected backend.
///
/// An existing build directory is reused as is, whatever the options.
///
/// # Errors
///
/// Returns the first tool or patcher failure.
pub async fn run_build<T>(settings: &BuildSettings, toolchain: &T) -> Result<()>
where
    T: Toolchain + ?Sized,
{
    info!(backend = %settings.backend, "building radare2");

    if settings.build_dir.exists() {
        debug!(build_dir = %settings.build_dir.display(), "reusing build directory");
    } else {
        toolchain.configure(&settings.meson()).await?;
    }

    if settings.backend.is_fast() {
        return toolchain.build(&NinjaTool::new(&settings.build_dir)).await;
    }

    if settings.xp && !settings.backend.is_newest_ide() {
        if settings.dry_run && !settings.build_dir.exists() {
            info!(
                "[dry-run] Would patch legacy toolset in {}",
                settings.build_dir.display()
            );
        } else {
            patch_legacy_toolset(&settings.build_dir, settings.dry_run).await?;
        }
    }
    if settings.project {
        info!("project generated, not building");
        return Ok(());
    }
    let solution = MsBuildTool::new(settings.build_dir.join(SOLUTION)).max_cpu_count();
    toolchain.build_project(&solution).await
}

/// Main handler for a build run.
///
/// Guards and environment checks happen before any tool is spawned.
///
/// # Errors
///
/// Returns configuration errors from the guards and overrides, or the first
/// failing step.
pub async fn run_build_command(
    args: &BuildArgs,
    config: &Config,
    dry_run: bool,
) -> Result<BuildSettings> {
    check_arguments(args)?;

    let platform = Platform::current();
    let settings = BuildSettings::resolve(args, config, platform, dry_run)?;

    let mut env = current_env();
    if let Some(sanitizers) = &args.asan {
        apply_sanitizers(&mut env, platform, sanitizers)?;
    }

    let ctx = ToolContext::new(Arc::new(config.clone()), dry_run).with_env(env);
    let toolchain = ProcessToolchain::new(ctx);

    if args.pull {
        toolchain.pull(&GitTool::pull(&settings.root)).await?;
    }
    run_build(&settings, &toolchain).await?;

    info!("build completed successfully");
    Ok(settings)
}
