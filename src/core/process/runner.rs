// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   build_command()   args, cwd, env, stdio
//!   spawn()           ExecutableNotFound / SpawnFailed
//!   run_child()       stream / capture output
//!   exit code check   NonZeroExit on anything but 0
//!     --> ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::fmt::Write as _;
use std::io::ErrorKind;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Returns the display name for this process: the program's file stem.
    pub(super) fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the full command line as a string, quoting arguments with spaces.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.program().display().to_string();
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to finish.
    ///
    /// # Errors
    ///
    /// - [`ProcessError::ExecutableNotFound`] when the program does not exist.
    /// - [`ProcessError::SpawnFailed`] when it cannot be started otherwise.
    /// - [`ProcessError::NonZeroExit`] when it exits unsuccessfully.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ProcessError::ExecutableNotFound {
                    name: self.program().display().to_string(),
                },
                _ => ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                },
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self.run_child(&name, &mut child).await?;

        if !output.success() {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        command.stdin(if self.stdout_flags().contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else {
            Stdio::null()
        });
        command.stdout(stdio_from_flags(self.stdout_flags()));
        command.stderr(stdio_from_flags(self.stderr_flags()));
        command.kill_on_drop(true);
        command
    }
}

fn stdio_from_flags(flags: StreamFlags) -> Stdio {
    if flags.contains(StreamFlags::INHERIT) {
        Stdio::inherit()
    } else {
        Stdio::piped()
    }
}
