// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The Windows distribution layout.
//!
//! ```text
//! {DIST}/
//!   bin/                 *.exe, *.dll, r2.bat
//!   {R2_LIBDIR}/         *.lib (shared) or *.a (static)
//!   {R2_INCDIR}/         headers, sdb/ r_util/ r_crypto/
//!   {R2_WWWROOT}/        web UI (optional)
//!   {R2_SDB}/            magic/ syscall/ fcnsign/ opcodes/ format/{dll/}
//!   {R2_FORTUNES}/ {R2_THEMES}/ {R2_FLAGS}/ {R2_HUD}/main
//! ```
//!
//! Static assets from `{ROOT}` are laid down first, then the databases the
//! build generated under `{BUILDDIR}` are layered on top.

use super::DistributionManifest;

/// Launcher placed next to the binaries; forwards every argument.
pub const LAUNCHER_SCRIPT: &str = "@\"%~dp0\\radare2\" %*\n";

/// Files that only matter to the build and are left out of copied trees.
const BUILD_METADATA: [&str; 2] = ["Makefile", "meson.build"];

/// Header subdirectories installed next to the top-level headers.
const HEADER_SUBDIRS: [&str; 3] = ["sdb", "r_util", "r_crypto"];

/// Generated databases: `libr/<module>/d/*.sdb` into `{R2_SDB}/<dir>`.
const SDB_DATABASES: [(&str, &str); 3] = [
    ("syscall", "syscall"),
    ("anal", "fcnsign"),
    ("asm", "opcodes"),
];

/// Builds the manifest for a Windows install tree.
///
/// `shared` selects import libraries over static archives; `webui` adds
/// the web UI assets.
#[must_use]
pub fn windows_manifest(shared: bool, webui: bool) -> DistributionManifest {
    let mut m = DistributionManifest::new();

    m.make_dir("{DIST}")
        .make_dir("{DIST}/bin")
        .copy_glob("{BUILDDIR}/binr/*/*.exe", "{DIST}/bin")
        .write_file("{DIST}/bin/r2.bat", LAUNCHER_SCRIPT)
        .copy_glob("{BUILDDIR}/libr/*/*.dll", "{DIST}/bin")
        .make_dir("{DIST}/{R2_LIBDIR}");
    if shared {
        m.copy_glob("{BUILDDIR}/libr/*/*.lib", "{DIST}/{R2_LIBDIR}");
    } else {
        m.copy_glob("{BUILDDIR}/libr/*/*.a", "{DIST}/{R2_LIBDIR}");
    }

    if webui {
        m.copy_tree("{ROOT}/shlr/www", "{DIST}/{R2_WWWROOT}");
    }
    m.copy_tree("{ROOT}/libr/magic/d/default", "{DIST}/{R2_SDB}/magic");

    for (module, db) in SDB_DATABASES {
        m.make_dir(format!("{{DIST}}/{{R2_SDB}}/{db}"))
            .copy_glob(
                format!("{{BUILDDIR}}/libr/{module}/d/*.sdb"),
                format!("{{DIST}}/{{R2_SDB}}/{db}"),
            );
    }

    for sub in HEADER_SUBDIRS {
        m.make_dir(format!("{{DIST}}/{{R2_INCDIR}}/{sub}"));
    }
    m.copy_glob("{ROOT}/libr/include/*.h", "{DIST}/{R2_INCDIR}")
        .copy_glob("{BUILDDIR}/r_version.h", "{DIST}/{R2_INCDIR}")
        .copy_glob("{BUILDDIR}/r_userconf.h", "{DIST}/{R2_INCDIR}");
    for sub in HEADER_SUBDIRS {
        m.copy_glob(
            format!("{{ROOT}}/libr/include/{sub}/*.h"),
            format!("{{DIST}}/{{R2_INCDIR}}/{sub}"),
        );
    }

    m.make_dir("{DIST}/{R2_FORTUNES}")
        .copy_glob("{ROOT}/doc/fortunes.*", "{DIST}/{R2_FORTUNES}")
        .copy_tree_excluding(
            "{ROOT}/libr/bin/d",
            "{DIST}/{R2_SDB}/format",
            BUILD_METADATA.into_iter().chain(["dll"]),
        )
        .make_dir("{DIST}/{R2_SDB}/format/dll")
        .copy_glob("{BUILDDIR}/libr/bin/d/*.sdb", "{DIST}/{R2_SDB}/format/dll")
        .copy_tree_excluding("{ROOT}/libr/cons/d", "{DIST}/{R2_THEMES}", BUILD_METADATA)
        .make_dir("{DIST}/{R2_FLAGS}")
        .copy_glob("{BUILDDIR}/libr/flag/d/*.r2", "{DIST}/{R2_FLAGS}")
        .make_dir("{DIST}/{R2_HUD}")
        .copy_glob("{ROOT}/doc/hud", "{DIST}/{R2_HUD}/main");

    m
}
