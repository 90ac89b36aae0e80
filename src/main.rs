mod cli;

use anyhow::{Context, Result};
use bytesniff::logging::{init_tracing, init_tracing_json};
use bytesniff::{inspect, load_buffer};
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if cli.log_json {
        init_tracing_json();
    } else {
        init_tracing();
    }

    let cfg = cli.inspect_config();
    let buffer = load_buffer(&cli.path)
        .map_err(|e| bytesniff::log_error!(e, "loading input"))
        .with_context(|| format!("inspection of {} aborted", cli.path.display()))?;
    let report = inspect(&buffer, &cfg).context("inspection failed")?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}
