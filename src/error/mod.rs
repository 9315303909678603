// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! thiserror enums, carried inside anyhow::Error:
//!   Config   InvalidOption, RelativePathRequired, IncompatibleFlags,
//!            InstallDirExists, UnsupportedPlatform, ...
//!   Template KeyNotFound, CyclicTemplate
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Patch    ProjectMissing, ToolsetNotFound
//!   Fs       AlreadyExists, NotFound, IoError
//! ```
//!
//! Every failure is terminal for the run. Functions return
//! [`Result`] (`anyhow`) and callers recover the typed kind with
//! `downcast_ref` when they need to assert on it.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Config Errors ---

/// Argument and configuration errors.
///
/// All of these are raised before any external tool is spawned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `--options` entry without `=`.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// A path-category override that is absolute.
    #[error("relative path is required: {0}")]
    RelativePathRequired(String),

    /// Two flags that cannot be combined.
    #[error("{flag} is not compatible with --backend {backend}")]
    IncompatibleFlags { flag: String, backend: String },

    /// Install destination already present.
    #[error("{0} already exists")]
    InstallDirExists(String),

    /// `--install` given without a destination on a platform that needs one.
    #[error("--install requires a destination directory on this platform")]
    InstallDirRequired,

    /// Feature refused on the host platform.
    #[error("{feature} is unsupported under {platform}")]
    UnsupportedPlatform { feature: String, platform: String },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Template Errors ---

/// Path template resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{NAME}` placeholder with no registry entry.
    #[error("unknown path placeholder '{{{key}}}'")]
    KeyNotFound { key: String },

    /// Placeholders that expand back into themselves.
    #[error("cyclic path placeholder: {}", chain.join(" -> "))]
    CyclicTemplate { chain: Vec<String> },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program does not exist, either as a path or on PATH.
    #[error("executable not found: '{name}'")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Patch Errors ---

/// Legacy toolset patching errors.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The regeneration project is absent from the build directory.
    #[error("project file not found: {path}")]
    ProjectMissing { path: String },

    /// No `<PlatformToolset>` element in the regeneration project.
    #[error("no PlatformToolset element in {path}")]
    ToolsetNotFound { path: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Destination exists where a fresh path was required.
    #[error("path already exists: {0}")]
    AlreadyExists(String),

    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Several matches for a destination that names a single file.
    #[error("{count} files match '{pattern}' but '{dest}' is not a directory")]
    AmbiguousTarget {
        pattern: String,
        dest: String,
        count: usize,
    },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
