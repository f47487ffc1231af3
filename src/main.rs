use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use promplot::{Pipeline, RangeQuery, Settings, TimeSpec};

#[derive(Parser, Debug)]
#[command(name = "promplot")]
#[command(about = "Fetch and plot Prometheus query data")]
struct Args {
    /// Prometheus query to execute
    query: String,

    /// Start time as a Unix timestamp or 'now - 24h'
    start_time: String,

    /// End time as a Unix timestamp or 'now'
    end_time: String,

    /// Step interval (e.g. '60s')
    step: String,

    /// Settings file (defaults to ./promplot.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    let started = Local::now();
    let now = started.timestamp();
    let start = TimeSpec::parse(&args.start_time)?.resolve(now);
    let end = TimeSpec::parse(&args.end_time)?.resolve(now);

    let query = RangeQuery::new(args.query, start, end, args.step);
    let pipeline = Pipeline::new(settings)?;
    pipeline.run(&query, started.naive_local())?;

    Ok(())
}
