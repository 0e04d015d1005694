use std::path::PathBuf;

use crate::downloader::BenchmarkRequest;
use crate::error::BenchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a benchmark run needs, assembled once at startup.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub url: String,
    /// Raw downloader invocation, tokenized shell-style when the request is built.
    pub command: String,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

impl BenchConfig {
    pub const DEFAULT_URL: &'static str =
        "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";
    pub const DEFAULT_COMMAND: &'static str = "go run main.go";
    pub const DEFAULT_OUTPUT_DIR: &'static str = ".";

    pub fn to_request(&self) -> Result<BenchmarkRequest, BenchError> {
        let base_command = shlex::split(&self.command).ok_or_else(|| {
            BenchError::InvalidRequest(format!("cannot tokenize command: {}", self.command))
        })?;

        // Passed to the downloader verbatim, so it must name the directory we create.
        let output_dir = self.output_dir.to_str().ok_or_else(|| {
            BenchError::InvalidRequest(format!(
                "output directory is not valid UTF-8: {}",
                self.output_dir.display()
            ))
        })?;

        Ok(BenchmarkRequest {
            url: self.url.clone(),
            base_command,
            output_dir: output_dir.to_string(),
        })
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT_URL.to_string(),
            command: Self::DEFAULT_COMMAND.to_string(),
            output_dir: PathBuf::from(Self::DEFAULT_OUTPUT_DIR),
            format: OutputFormat::Text,
        }
    }
}
