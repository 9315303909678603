// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host platform detection.
//!
//! Passed explicitly into the drivers so that Windows-only paths (install,
//! default prefix) can be exercised from tests on any host.

use std::fmt;

/// The platform `r2-meson` is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    OpenBsd,
    Linux,
    Other,
}

impl Platform {
    /// Detects the host platform.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "openbsd" => Self::OpenBsd,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "Windows",
            Self::MacOs => "Darwin",
            Self::OpenBsd => "OpenBSD",
            Self::Linux => "Linux",
            Self::Other => "unknown",
        })
    }
}
