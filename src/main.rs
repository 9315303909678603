// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> --alias? --> Config --> Logging
//!   --> plan_install --> build --> install
//! ```

use std::process::ExitCode;

use r2_meson::cli::global::GlobalOptions;
use r2_meson::cli::{self, Cli};
use r2_meson::cmd::alias::run_alias_command;
use r2_meson::cmd::build::run_build_command;
use r2_meson::cmd::install::{plan_install, run_install};
use r2_meson::config::Config;
use r2_meson::config::loader::ConfigLoader;
use r2_meson::core::platform::Platform;
use r2_meson::error::Result;
use r2_meson::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Config file picked up from the current directory.
const DEFAULT_CONFIG_FILE: &str = "r2-meson.toml";

/// Prefix for `R2MESON_<SECTION>__<KEY>` overrides.
const ENV_PREFIX: &str = "R2MESON";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.alias {
        return match run_alias_command() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        };
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = cli.global.log_config(&config.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    let dry_run = cli.global.is_dry(&config.global);
    let plan = plan_install(&cli.install, Platform::current())?;

    let settings = run_build_command(&cli.build, config, dry_run).await?;
    run_install(&plan, &settings, cli.build.webui).await?;
    Ok(())
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global).build()
}
