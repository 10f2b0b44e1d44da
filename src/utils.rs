use std::io::{self, IsTerminal, Write};
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::stats::RankedResult;

/// Logs go to stderr so stdout only carries results. `RUST_LOG` wins over
/// the verbosity flag when set.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// One cookie per line, in ranking order.
pub fn write_most_active<W: Write>(out: &mut W, result: &RankedResult) -> io::Result<()> {
    for cookie in &result.cookies {
        writeln!(out, "{}", cookie)?;
    }
    Ok(())
}

pub fn print_most_active(result: &RankedResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_most_active(&mut out, result)?;
    out.flush()
}
