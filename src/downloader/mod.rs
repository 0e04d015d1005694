mod executor;
mod planer;
mod report;

pub use planer::{BenchmarkRequest, Strategy};
pub use report::BenchReport;

use tokio::fs;
use tracing::{debug, info};

use crate::config::{BenchConfig, OutputFormat};
use crate::error::BenchError;
use report::{RunTiming, format_seconds};

/// Runs the single-connection download, then the concurrent one, and reports both.
///
/// Any failure aborts the remaining steps; the concurrent run never starts if the
/// single run fails.
pub async fn benchmark(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    let verbose = config.format == OutputFormat::Text;

    debug!("building commands");
    let request = config.to_request()?;
    let (single_cmd, concurrent_cmd) = planer::build(&request)?;

    fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| BenchError::Filesystem {
            path: config.output_dir.clone(),
            source,
        })?;

    if verbose {
        println!("URL: {}", request.url);
        println!("Single command: {}", single_cmd.command_line());
        println!("Concurrent command: {}", concurrent_cmd.command_line());
        println!("Running single download (forced single)...");
    }

    debug!("running single");
    let single_elapsed = executor::run(&single_cmd).await?;
    info!(seconds = single_elapsed.as_secs_f64(), "single download finished");
    let single = RunTiming::new(&single_cmd, single_elapsed);

    if verbose {
        println!("Single time: {}", format_seconds(single.seconds));
        println!("Running concurrent download...");
    }

    debug!("running concurrent");
    let concurrent_elapsed = executor::run(&concurrent_cmd).await?;
    info!(
        seconds = concurrent_elapsed.as_secs_f64(),
        "concurrent download finished"
    );
    let concurrent = RunTiming::new(&concurrent_cmd, concurrent_elapsed);

    if verbose {
        println!("Concurrent time: {}", format_seconds(concurrent.seconds));
    }

    debug!("reporting");
    Ok(BenchReport::new(request.url, single, concurrent))
}
