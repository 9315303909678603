// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! ```text
//! Env (BTreeMap<OsString, OsString>, deterministic order)
//! Sources: current_env(), Env::new(), Env::from_vars()
//! Ops: set / set_with_flags(Append) / get / iter
//!
//! sanitizer::apply_sanitizers(env, platform, list)
//!   CFLAGS  += " -fsanitize=<list>"
//!   LDFLAGS += " -fsanitize=<list>"   (not on macOS)
//! ```
//!
//! Names and values are kept as `OsString`: POSIX environments may hold
//! bytes that are not UTF-8, and those are passed through untouched. The
//! environment is handed to child processes explicitly; the process
//! environment of `r2-meson` itself is never modified.

pub mod sanitizer;


use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> Env {
    Env::from_vars(std::env::vars_os())
}

/// How a value combines with an existing variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Append to the existing value
    Append,
}

/// A set of environment variables passed to a child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<OsString, OsString>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Builds an environment from name/value pairs; later names win.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags.
    ///
    /// Appending to a missing variable behaves like appending to an empty
    /// string.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<OsString>,
        value: impl Into<OsString>,
        flags: EnvFlags,
    ) -> &mut Self {
        let value = value.into();
        match flags {
            EnvFlags::Replace => {
                self.vars.insert(key.into(), value);
            }
            EnvFlags::Append => {
                self.vars.entry(key.into()).or_default().push(&value);
            }
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
