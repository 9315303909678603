// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sanitizer flag wiring for `--asan`.

use super::{Env, EnvFlags};
use crate::core::platform::Platform;
use crate::error::ConfigError;

/// Sanitizers enabled by a bare `--asan`.
pub const DEFAULT_SANITIZERS: &str = "address,undefined,signed-integer-overflow";

/// Appends `-fsanitize=<sanitizers>` to the compiler and linker flags.
///
/// macOS links sanitizers through the compiler driver, so `LDFLAGS` is left
/// alone there.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedPlatform`] on OpenBSD.
pub fn apply_sanitizers(
    env: &mut Env,
    platform: Platform,
    sanitizers: &str,
) -> Result<(), ConfigError> {
    if platform == Platform::OpenBsd {
        return Err(ConfigError::UnsupportedPlatform {
            feature: "asan".to_string(),
            platform: platform.to_string(),
        });
    }

    let flag = format!(" -fsanitize={sanitizers}");
    env.set_with_flags("CFLAGS", flag.clone(), EnvFlags::Append);
    if platform != Platform::MacOs {
        env.set_with_flags("LDFLAGS", flag, EnvFlags::Append);
    }

    tracing::debug!(
        cflags = ?env.get("CFLAGS"),
        ldflags = ?env.get("LDFLAGS"),
        "sanitizer flags"
    );
    Ok(())
}
