// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::{NameFilter, copy_file, copy_into, copy_tree, move_into};
use super::walk::{expand_glob, find_files, split_glob};
use crate::error::FsError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, rel).unwrap();
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn pattern(root: &Path, rest: &str) -> String {
    format!("{}/{rest}", root.display())
}

#[test]
fn test_split_glob() {
    let (root, rest) = split_glob("/tmp/build/binr/*/*.exe");
    assert_eq!(root, PathBuf::from("/tmp/build/binr"));
    assert_eq!(rest.as_deref(), Some("*/*.exe"));

    let (root, rest) = split_glob("/tmp/root/doc/hud");
    assert_eq!(root, PathBuf::from("/tmp/root/doc/hud"));
    assert!(rest.is_none());

    let (root, rest) = split_glob("*.h");
    assert_eq!(root, PathBuf::from("."));
    assert_eq!(rest.as_deref(), Some("*.h"));
}

#[test]
fn test_expand_glob_star_does_not_recurse() {
    let temp = temp_dir();
    touch(temp.path(), "binr/radare2/radare2.exe");
    touch(temp.path(), "binr/rabin2/rabin2.exe");
    touch(temp.path(), "binr/rabin2/nested/deep.exe");
    touch(temp.path(), "binr/rabin2/rabin2.pdb");

    let found = expand_glob(&pattern(temp.path(), "binr/*/*.exe")).unwrap();
    insta::assert_debug_snapshot!(relative(temp.path(), &found), @r#"
    [
        "binr/rabin2/rabin2.exe",
        "binr/radare2/radare2.exe",
    ]
    "#);
}

#[test]
fn test_expand_glob_double_star_recurses() {
    let temp = temp_dir();
    touch(temp.path(), "a.sdb");
    touch(temp.path(), "x/b.sdb");
    touch(temp.path(), "x/y/c.sdb");
    touch(temp.path(), "x/y/c.txt");

    let found = expand_glob(&pattern(temp.path(), "**/*.sdb")).unwrap();
    assert_eq!(
        relative(temp.path(), &found),
        vec!["a.sdb", "x/b.sdb", "x/y/c.sdb"]
    );
}

#[test]
fn test_expand_glob_literal_and_missing() {
    let temp = temp_dir();
    touch(temp.path(), "doc/hud");

    let literal = expand_glob(&pattern(temp.path(), "doc/hud")).unwrap();
    assert_eq!(literal, vec![temp.path().join("doc/hud")]);

    assert!(expand_glob(&pattern(temp.path(), "doc/nothing")).unwrap().is_empty());
    assert!(expand_glob(&pattern(temp.path(), "absent/*.h")).unwrap().is_empty());
}

#[test]
fn test_find_files() {
    let temp = temp_dir();
    touch(temp.path(), "REGEN.vcxproj");
    touch(temp.path(), "libr/util/r_util.vcxproj");
    touch(temp.path(), "libr/util/r_util.vcxproj.filters");
    touch(temp.path(), ".hidden/x.vcxproj");

    let found = find_files(temp.path(), "**/*.vcxproj").unwrap();
    assert_eq!(
        relative(temp.path(), &found),
        vec![".hidden/x.vcxproj", "REGEN.vcxproj", "libr/util/r_util.vcxproj"]
    );

    assert!(find_files(temp.path().join("missing"), "**/*").is_err());
}

#[test]
fn test_name_filter() {
    let filter = NameFilter::new(["Makefile", "meson.build", "*.o"]).unwrap();
    assert!(filter.matches("Makefile"));
    assert!(filter.matches("meson.build"));
    assert!(filter.matches("foo.o"));
    assert!(!filter.matches("elf.sdb.txt"));
    assert!(!NameFilter::default().matches("Makefile"));
}

#[tokio::test]
async fn test_copy_tree_excludes_at_every_depth() {
    let src = temp_dir();
    touch(src.path(), "Makefile");
    touch(src.path(), "meson.build");
    touch(src.path(), "elf");
    touch(src.path(), "pe/Makefile");
    touch(src.path(), "pe/pe64");
    touch(src.path(), "pe/deeper/Makefile");
    touch(src.path(), "pe/deeper/keep");
    touch(src.path(), "dll/generated.sdb");

    let out = temp_dir();
    let dst = out.path().join("format");
    let exclude = NameFilter::new(["Makefile", "meson.build", "dll"]).unwrap();
    copy_tree(src.path(), &dst, &exclude).await.unwrap();

    let mut copied = relative(&dst, &find_files(&dst, "**/*").unwrap());
    copied.sort();
    assert_eq!(copied, vec!["elf", "pe/deeper/keep", "pe/pe64"]);
    assert!(!dst.join("dll").exists());
}

#[tokio::test]
async fn test_copy_tree_refuses_existing_destination() {
    let src = temp_dir();
    touch(src.path(), "a");
    let dst = temp_dir();

    let err = copy_tree(src.path(), dst.path(), &NameFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FsError>(),
        Some(FsError::AlreadyExists(_))
    ));

    let err = copy_tree(&src.path().join("missing"), &dst.path().join("new"), &NameFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err.downcast_ref::<FsError>(), Some(FsError::NotFound(_))));
}

#[tokio::test]
async fn test_copy_file_preserves_mtime() {
    let temp = temp_dir();
    let src = temp.path().join("src.txt");
    std::fs::write(&src, "data").unwrap();
    let old = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000_000);
    std::fs::File::options()
        .write(true)
        .open(&src)
        .unwrap()
        .set_modified(old)
        .unwrap();

    let dst = temp.path().join("dst.txt");
    copy_file(&src, &dst).await.unwrap();

    assert_eq!(std::fs::read_to_string(&dst).unwrap(), "data");
    assert_eq!(std::fs::metadata(&dst).unwrap().modified().unwrap(), old);
}

#[tokio::test]
async fn test_copy_into_directory_or_file_target() {
    let temp = temp_dir();
    touch(temp.path(), "doc/hud");
    std::fs::create_dir(temp.path().join("out")).unwrap();

    let into_dir = copy_into(&temp.path().join("doc/hud"), &temp.path().join("out"))
        .await
        .unwrap();
    assert_eq!(into_dir, temp.path().join("out/hud"));

    let renamed = copy_into(&temp.path().join("doc/hud"), &temp.path().join("out/main"))
        .await
        .unwrap();
    assert_eq!(renamed, temp.path().join("out/main"));
    assert_eq!(std::fs::read_to_string(renamed).unwrap(), "doc/hud");
}

#[tokio::test]
async fn test_move_into_directory() {
    let temp = temp_dir();
    touch(temp.path(), "a.sdb");
    std::fs::create_dir(temp.path().join("dest")).unwrap();

    let moved = move_into(&temp.path().join("a.sdb"), &temp.path().join("dest"))
        .await
        .unwrap();
    assert_eq!(moved, temp.path().join("dest/a.sdb"));
    assert!(moved.exists());
    assert!(!temp.path().join("a.sdb").exists());
}
