// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{PatchOutcome, extract_toolset, patch_legacy_toolset};
use crate::error::PatchError;
use crate::test_utils::run_with_logs;

fn project(toolset: &str) -> String {
    format!(
        "<Project>\n  <PropertyGroup>\n    <PlatformToolset>{toolset}</PlatformToolset>\n  </PropertyGroup>\n</Project>\n"
    )
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

#[test]
fn test_extract_toolset() {
    assert_eq!(extract_toolset(&project("v141")).unwrap(), Some("v141"));
    assert_eq!(extract_toolset("<Project/>").unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn test_already_legacy_is_skipped() {
    let build = tempfile::tempdir().unwrap();
    write(build.path(), "REGEN.vcxproj", &project("v140_xp"));
    write(build.path(), "libr/r_util.vcxproj", &project("v140_xp"));

    let (outcome, logs) = run_with_logs(|| patch_legacy_toolset(build.path(), false)).await;

    assert_eq!(
        outcome.unwrap(),
        PatchOutcome::Skipped {
            toolset: "v140_xp".to_string()
        }
    );
    assert!(logs.contains("skipping"), "{logs}");
    assert_eq!(
        std::fs::read_to_string(build.path().join("libr/r_util.vcxproj")).unwrap(),
        project("v140_xp")
    );
}

#[tokio::test]
async fn test_patches_every_project_recursively() {
    let build = tempfile::tempdir().unwrap();
    write(build.path(), "REGEN.vcxproj", &project("v141"));
    write(build.path(), "libr/util/r_util.vcxproj", &project("v141"));
    write(build.path(), "binr/radare2/radare2.vcxproj", &project("v141"));
    write(build.path(), "notes.txt", "v141");

    let outcome = patch_legacy_toolset(build.path(), false).await.unwrap();
    let PatchOutcome::Patched { from, to, files } = outcome else {
        panic!("expected a patch");
    };
    assert_eq!((from.as_str(), to.as_str()), ("v141", "v141_xp"));
    assert_eq!(files.len(), 3);

    for rel in [
        "REGEN.vcxproj",
        "libr/util/r_util.vcxproj",
        "binr/radare2/radare2.vcxproj",
    ] {
        assert_eq!(
            std::fs::read_to_string(build.path().join(rel)).unwrap(),
            project("v141_xp"),
            "{rel}"
        );
    }
    assert_eq!(
        std::fs::read_to_string(build.path().join("notes.txt")).unwrap(),
        "v141"
    );
}

#[tokio::test]
async fn test_dry_run_leaves_files_alone() {
    let build = tempfile::tempdir().unwrap();
    write(build.path(), "REGEN.vcxproj", &project("v141"));

    let outcome = patch_legacy_toolset(build.path(), true).await.unwrap();
    assert!(matches!(outcome, PatchOutcome::Patched { .. }));
    assert_eq!(
        std::fs::read_to_string(build.path().join("REGEN.vcxproj")).unwrap(),
        project("v141")
    );
}

#[tokio::test]
async fn test_missing_regen_project() {
    let build = tempfile::tempdir().unwrap();
    let err = patch_legacy_toolset(build.path(), false).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PatchError>(),
        Some(PatchError::ProjectMissing { .. })
    ));
}

#[tokio::test]
async fn test_regen_without_toolset() {
    let build = tempfile::tempdir().unwrap();
    write(build.path(), "REGEN.vcxproj", "<Project/>");
    let err = patch_legacy_toolset(build.path(), false).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PatchError>(),
        Some(PatchError::ToolsetNotFound { .. })
    ));
}
