// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        additional config files (can repeat)
//! --dry             log tool runs and file operations instead
//! --log-level N     console verbosity (0-6)
//! --file-log-level  file verbosity (defaults to --log-level)
//! --log-file FILE   enables the file sink
//!
//! Precedence: CLI flags > R2MESON_* > --ini > r2-meson.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::types::GlobalConfig;
use crate::logging::{LogConfig, LogLevel};

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Logs what would be run and copied without doing it.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Whether this run is a dry run, by flag or by configuration.
    #[must_use]
    pub const fn is_dry(&self, config: &GlobalConfig) -> bool {
        self.dry || config.dry
    }

    /// Logging setup: command-line levels over configured ones.
    #[must_use]
    pub fn log_config(&self, config: &GlobalConfig) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or(config.output_log_level);

        let file_level = self
            .file_log_level
            .or(self.log_level)
            .and_then(LogLevel::from_u8)
            .unwrap_or(config.file_log_level);

        let log_file = self.log_file.as_ref().or(config.log_file.as_ref());

        LogConfig::builder()
            .with_console_level(console_level)
            .with_file_level(file_level)
            .maybe_with_log_file(log_file.map(|p| p.display().to_string()))
            .build()
    }
}
