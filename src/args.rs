use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "most-active-cookie",
    about = "Find the most active cookie(s) in a cookie log for a given day",
    version,
    long_about = None
)]
pub struct Args {
    /// Cookie log file (.csv), relative to the base directory
    pub logfile: String,

    /// Day to query, in YYYY-MM-DD format
    #[arg(short, long)]
    pub date: String,

    /// Directory the log file is looked up in [default: current directory]
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
