// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for child processes.
//!
//! ```text
//! run_child()
//!   stdout reader task ─┐
//!   stderr reader task ─┼─ lines: debug! and/or kept
//!   child.wait()       ─┘
//!     --> ProcessOutput
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Streams output while waiting for the child to exit.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout = child
            .stdout
            .take()
            .map(|s| spawn_reader(s, self.stdout_flags(), name, "stdout"));
        let stderr = child
            .stderr
            .take()
            .map(|s| spawn_reader(s, self.stderr_flags(), name, "stderr"));

        let status = child
            .wait()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: self.command_line(),
                source,
            })?;

        Ok(ProcessOutput::new(
            status.code().unwrap_or(-1),
            join_reader(stdout).await,
            join_reader(stderr).await,
        ))
    }
}

fn spawn_reader<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let process_name = process_name.to_string();
    tokio::spawn(async move {
        let mut kept = String::new();
        let mut lines = BufReader::new(reader).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                        debug!(process = %process_name, stream = stream_name, "{line}");
                    }
                    if flags.contains(StreamFlags::KEEP_IN_STRING) {
                        if !kept.is_empty() {
                            kept.push('\n');
                        }
                        kept.push_str(&line);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(process = %process_name, stream = stream_name, error = %e, "error reading stream");
                    break;
                }
            }
        }
        kept
    })
}

async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}
