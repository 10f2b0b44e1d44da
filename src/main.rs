use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use tracing::error;

use most_active_cookie::{utils, Args, CookieLogProcessor, RankedResult};

fn run(args: &Args) -> Result<RankedResult> {
    let base_dir = match &args.base_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("Failed to resolve the current directory")?,
    };

    let processor = CookieLogProcessor::new(&args.date, &args.logfile, &base_dir)?;
    Ok(processor.get_most_active()?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match run(&args) {
        Ok(result) => {
            utils::print_most_active(&result).context("Failed to write results")?;
            Ok(())
        }
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
