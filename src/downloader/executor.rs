use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::debug;

use crate::downloader::planer::CommandSpec;
use crate::error::BenchError;

/// Runs one command to completion with inherited stdio and returns how long it took.
///
/// There is no timeout: a child that never exits blocks the caller forever.
pub async fn run(spec: &CommandSpec) -> Result<Duration, BenchError> {
    let (program, args) = spec
        .argv
        .split_first()
        .ok_or_else(|| BenchError::InvalidRequest("command is empty".into()))?;

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!(label = %spec.label, argv = ?spec.argv, "spawning downloader");

    let start = Instant::now();
    let mut child = command.spawn().map_err(|source| BenchError::Spawn {
        command: spec.command_line(),
        source,
    })?;
    let status = child.wait().await.map_err(|source| BenchError::Wait {
        command: spec.command_line(),
        source,
    })?;
    let elapsed = start.elapsed();

    debug!(label = %spec.label, ?status, ?elapsed, "downloader exited");

    if !status.success() {
        return Err(BenchError::ChildProcessFailed {
            label: spec.label,
            command: spec.command_line(),
            code: status.code(),
        });
    }

    Ok(elapsed)
}
