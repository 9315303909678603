// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use crate::core::env::Env;
use crate::error::ProcessError;

#[cfg(not(windows))]
fn sh(script: &str) -> ProcessBuilder {
    ProcessBuilder::new("/bin/sh").args(["-c", script])
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_captures_stdout() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_stdout()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_captures_multiple_lines() {
    let output = sh("printf 'a\\nb\\n'; printf 'err\\n' >&2")
        .capture_stdout()
        .run()
        .await
        .expect("printf should succeed");

    assert_eq!(output.stdout(), "a\nb");
    assert_eq!(output.stderr(), "");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_nonzero_exit_is_typed() {
    let err = sh("exit 42")
        .run()
        .await
        .expect_err("exit 42 must fail");

    let process_err = err
        .downcast_ref::<ProcessError>()
        .expect("error should be a ProcessError");
    assert!(matches!(
        process_err,
        ProcessError::NonZeroExit { code: 42, .. }
    ));
}

#[tokio::test]
async fn test_missing_program_is_executable_not_found() {
    let err = ProcessBuilder::new("r2_meson_no_such_program_12345")
        .run()
        .await
        .expect_err("spawning a missing program must fail");

    insta::assert_snapshot!(err.to_string(), @"executable not found: 'r2_meson_no_such_program_12345'");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_env_replaces_inherited_environment() {
    let mut env = Env::new();
    env.set("R2_TEST_VAR", "test_value");

    let output = sh("echo \"$R2_TEST_VAR:$HOME\"")
        .env(env)
        .capture_stdout()
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"test_value:");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let output = ProcessBuilder::new("pwd")
        .cwd(dir.path())
        .capture_stdout()
        .run()
        .await
        .unwrap();

    let reported = std::path::PathBuf::from(output.stdout().trim());
    assert_eq!(
        reported.canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn test_command_line_quotes_spaced_arguments() {
    let builder = ProcessBuilder::new("meson")
        .arg("setup")
        .arg("C:/My Projects/radare2")
        .arg("build");
    insta::assert_snapshot!(builder.command_line(), @r#"meson setup "C:/My Projects/radare2" build"#);
}

#[test]
fn test_executable_lookup_not_found() {
    assert!(ProcessBuilder::find("nonexistent_program_12345").is_none());
}

#[cfg(not(windows))]
#[test]
fn test_executable_lookup_is_cached() {
    let first = ProcessBuilder::find("sh").expect("sh should be in PATH");
    assert!(first.is_absolute());
    assert_eq!(ProcessBuilder::find("sh"), Some(first));
}
