use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simple_logger::init_with_level;

use reformatfasta::{reformat, Args, Config};

fn main() -> Result<()> {
    let start = std::time::Instant::now();
    let args = Args::parse();

    init_with_level(args.level).context("cannot initialize logger")?;
    info!("Starting reformatfasta with args: {}", args);

    let config = Config::from_args(&args);
    let summary = reformat(&config)
        .with_context(|| format!("failed to reformat {}", config.sequence_dir.display()))?;

    info!(
        "Processed {} files: {} records in, {} written, {} duplicates",
        summary.files, summary.records_in, summary.records_out, summary.duplicates
    );
    info!("Elapsed time: {:.2} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
