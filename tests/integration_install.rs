// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the build and install drivers.
//!
//! Tool runs are dry so no meson or ninja is needed; the install runs for
//! real against a fake source tree.

use std::path::Path;

use clap::Parser;
use r2_meson::cli::Cli;
use r2_meson::cmd::build::{BuildSettings, run_build_command};
use r2_meson::cmd::install::{InstallPlan, plan_install, run_install};
use r2_meson::config::Config;
use r2_meson::core::platform::Platform;
use r2_meson::dist::{Assembler, DistributionManifest};
use r2_meson::error::{ConfigError, TemplateError};
use r2_meson::template::TemplateRegistry;
use r2_meson::utility::fs::walk::find_files;

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, rel).unwrap();
}

fn source_tree(root: &Path) {
    for rel in [
        "configure.acr",
        "libr/include/r_core.h",
        "libr/include/sdb/sdb.h",
        "libr/magic/d/default/elf",
        "libr/bin/d/pe",
        "libr/bin/d/Makefile",
        "libr/bin/d/dll/README",
        "libr/cons/d/solarized",
        "libr/cons/d/meson.build",
        "doc/fortunes.tips",
        "doc/hud",
        "build/binr/radare2/radare2.exe",
        "build/libr/core/r_core.dll",
        "build/libr/core/r_core.lib",
        "build/libr/bin/d/dll_kernel32.sdb",
        "build/libr/flag/d/tags.r2",
        "build/r_version.h",
    ] {
        write(root, rel);
    }
}

fn parse(argv: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("r2-meson").chain(argv.iter().copied())).unwrap()
}

fn config_for(root: &Path) -> Config {
    let mut config = Config::default();
    config.paths.root = Some(root.to_path_buf());
    config
}

fn listing(root: &Path) -> Vec<String> {
    find_files(root, "**/*")
        .unwrap()
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[tokio::test]
async fn dry_build_spawns_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let cli = parse(&["--dir", "out"]);

    let settings = run_build_command(&cli.build, &config_for(temp.path()), true)
        .await
        .unwrap();

    assert_eq!(settings.build_dir, temp.path().join("out"));
    assert!(!settings.build_dir.exists());
}

#[tokio::test]
async fn guard_violation_fails_before_anything_runs() {
    let temp = tempfile::tempdir().unwrap();
    let cli = parse(&["--project"]);

    let err = run_build_command(&cli.build, &config_for(temp.path()), false)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::IncompatibleFlags { .. })
    ));
    assert!(!temp.path().join("build").exists());
}

#[tokio::test]
async fn windows_install_end_to_end() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("radare2");
    source_tree(&root);
    let dist = temp.path().join("r2-dist");
    let dist_arg = dist.to_string_lossy().into_owned();

    let cli = parse(&[
        "--shared",
        "--install",
        &dist_arg,
        "--options",
        "R2_LIBDIR=lib/r2",
    ]);
    let plan = plan_install(&cli.install, Platform::Windows).unwrap();
    assert_eq!(plan, InstallPlan::Windows(dist.clone()));

    let settings =
        BuildSettings::resolve(&cli.build, &config_for(&root), Platform::Windows, false).unwrap();
    run_install(&plan, &settings, cli.build.webui).await.unwrap();

    insta::assert_debug_snapshot!(listing(&dist), @r#"
    [
        "bin/r2.bat",
        "bin/r_core.dll",
        "bin/radare2.exe",
        "include/r_core.h",
        "include/r_version.h",
        "include/sdb/sdb.h",
        "lib/r2/r_core.lib",
        "share/cons/solarized",
        "share/doc/fortunes.tips",
        "share/flag/tags.r2",
        "share/format/dll/dll_kernel32.sdb",
        "share/format/pe",
        "share/hud/main",
        "share/magic/elf",
    ]
    "#);

    // A second install into the same directory is refused up front.
    let err = plan_install(&cli.install, Platform::Windows).unwrap_err();
    assert!(matches!(err, ConfigError::InstallDirExists(_)));
}

#[tokio::test]
async fn custom_manifest_with_nested_templates() {
    let temp = tempfile::tempdir().unwrap();
    write(temp.path(), "src/a.txt");
    write(temp.path(), "src/b.txt");

    let mut registry = TemplateRegistry::new();
    registry
        .insert("BASE", temp.path().to_string_lossy())
        .insert("OUT", "{BASE}/out")
        .insert("DOCS", "{OUT}/docs");

    let mut manifest = DistributionManifest::new();
    manifest
        .make_dir("{DOCS}")
        .copy_glob("{BASE}/src/*.txt", "{DOCS}")
        .write_file("{OUT}/VERSION", "5.9.8\n");

    let report = Assembler::new(&registry).execute(&manifest).await.unwrap();

    assert_eq!(report.files_copied, 2);
    assert_eq!(
        listing(&temp.path().join("out")),
        ["VERSION", "docs/a.txt", "docs/b.txt"]
    );
}

#[tokio::test]
async fn cyclic_template_is_reported() {
    let mut registry = TemplateRegistry::new();
    registry.insert("A", "{B}/x").insert("B", "{A}/y");

    let mut manifest = DistributionManifest::new();
    manifest.make_dir("{A}");

    let err = Assembler::new(&registry)
        .execute(&manifest)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TemplateError>(),
        Some(TemplateError::CyclicTemplate { .. })
    ));
}
