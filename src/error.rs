use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::downloader::Strategy;

/// Errors that abort a benchmark run. None of them are retried.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Malformed input to command construction; nothing was spawned.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The downloader exited with a non-success status.
    #[error("{label} run failed ({}): {command}", describe_code(.code))]
    ChildProcessFailed {
        label: Strategy,
        command: String,
        code: Option<i32>,
    },

    /// The downloader could not be started at all.
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The downloader started but its exit status could not be collected.
    #[error("failed waiting for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot prepare output directory {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render report: {0}")]
    Output(#[from] serde_json::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl BenchError {
    /// Exit status for this failure: the child's own code when it fits, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        match self {
            BenchError::ChildProcessFailed {
                code: Some(code), ..
            } if (1..=255).contains(code) => *code as u8,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
