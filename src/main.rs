use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
use config::{BenchConfig, OutputFormat};

mod downloader;
use downloader::benchmark;

mod error;

#[derive(Parser)]
#[command(name = "fetchbench")]
#[command(about = "Benchmark a downloader in single-connection vs concurrent mode")]
#[command(version = "1.0")]
struct Cli {
    #[arg(long, help = "File URL to download", default_value = BenchConfig::DEFAULT_URL)]
    url: String,
    #[arg(
        long,
        help = "Base command to run the downloader (e.g. 'go run main.go' or './gofetch')",
        default_value = BenchConfig::DEFAULT_COMMAND
    )]
    cmd: String,
    #[arg(long, help = "Output directory", default_value = BenchConfig::DEFAULT_OUTPUT_DIR)]
    outdir: PathBuf,
    #[arg(long, help = "Print the final report as JSON")]
    json: bool,
}

impl From<Cli> for BenchConfig {
    fn from(cli: Cli) -> Self {
        BenchConfig {
            url: cli.url,
            command: cli.cmd,
            output_dir: cli.outdir,
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::from(Cli::parse());

    let result = benchmark(&config).await.and_then(|report| {
        match config.format {
            OutputFormat::Text => {
                if let Some(line) = report.speedup_line() {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => println!("{}", report.to_json()?),
        }
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "benchmark aborted");
            eprintln!("Error: {}", err);
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let config = BenchConfig::from(Cli::parse_from(["fetchbench"]));

        assert_eq!(config.url, BenchConfig::DEFAULT_URL);
        assert_eq!(config.command, BenchConfig::DEFAULT_COMMAND);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_overrides() {
        let config = BenchConfig::from(Cli::parse_from([
            "fetchbench",
            "--url",
            "http://host/a.iso",
            "--cmd",
            "./gofetch --quiet",
            "--outdir",
            "/tmp/bench",
            "--json",
        ]));

        assert_eq!(config.url, "http://host/a.iso");
        assert_eq!(config.command, "./gofetch --quiet");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/bench"));
        assert_eq!(config.format, OutputFormat::Json);
    }
}
