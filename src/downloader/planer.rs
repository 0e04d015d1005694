use std::fmt;

use serde::Serialize;

use crate::error::BenchError;

pub const DEFAULT_FILENAME: &str = "download.bin";

const FORCE_SINGLE_FLAG: &str = "--force-single";
const EXIT_WHEN_DONE_FLAG: &str = "--exit-when-done";
const OUTPUT_FLAG: &str = "--output";
const FILENAME_FLAG: &str = "--filename";

/// Which download strategy a command exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Single,
    Concurrent,
}

impl Strategy {
    pub fn filename_prefix(&self) -> &'static str {
        match self {
            Strategy::Single => "single_",
            Strategy::Concurrent => "concurrent_",
        }
    }

    fn forces_single(&self) -> bool {
        matches!(self, Strategy::Single)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Single => write!(f, "single"),
            Strategy::Concurrent => write!(f, "concurrent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRequest {
    pub url: String,
    pub base_command: Vec<String>,
    pub output_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub argv: Vec<String>,
    pub label: Strategy,
}

impl CommandSpec {
    /// Shell-quoted command line, suitable for pasting back into a terminal.
    pub fn command_line(&self) -> String {
        shlex::try_join(self.argv.iter().map(String::as_str))
            .unwrap_or_else(|_| self.argv.join(" "))
    }
}

/// Base filename for a download: the last path segment with any query dropped.
pub fn derive_filename(url: &str) -> &str {
    let without_query = url.split('?').next().unwrap_or(url);
    match without_query.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_FILENAME,
    }
}

fn command_for(request: &BenchmarkRequest, filename: &str, label: Strategy) -> CommandSpec {
    let mut argv = request.base_command.clone();
    if label.forces_single() {
        argv.push(FORCE_SINGLE_FLAG.to_string());
    }
    argv.push(EXIT_WHEN_DONE_FLAG.to_string());
    argv.push(OUTPUT_FLAG.to_string());
    argv.push(request.output_dir.clone());
    argv.push(FILENAME_FLAG.to_string());
    argv.push(format!("{}{}", label.filename_prefix(), filename));
    argv.push(request.url.clone());

    CommandSpec { argv, label }
}

/// Builds the single-connection and concurrent command lines for one request.
pub fn build(request: &BenchmarkRequest) -> Result<(CommandSpec, CommandSpec), BenchError> {
    if request.base_command.is_empty() {
        return Err(BenchError::InvalidRequest("base command is empty".into()));
    }
    if request.url.trim().is_empty() {
        return Err(BenchError::InvalidRequest("url is empty".into()));
    }

    let filename = derive_filename(&request.url);
    Ok((
        command_for(request, filename, Strategy::Single),
        command_for(request, filename, Strategy::Concurrent),
    ))
}
