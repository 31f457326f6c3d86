mod invariants;
mod models;
mod parser;
mod render;
mod report;

use std::{fs, path::PathBuf};

use clap::Parser;
use models::LogEntry;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "server.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.log_file)
        .map_err(|e| format!("failed to read {}: {e}", args.log_file.display()))?;
    let lines: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    let entries: Vec<LogEntry> = lines.iter().filter_map(|l| parser::parse_line(l)).collect();
    tracing::info!(
        lines = lines.len(),
        parsed = entries.len(),
        skipped = lines.len() - entries.len(),
        "parsed log file"
    );

    render::print_table("Endpoint Counts", &report::endpoint_counts(&entries));
    println!();
    render::print_table("API Calls per Minute", &report::calls_per_minute(&entries));
    println!();
    render::print_table("API Calls by Status Code", &report::calls_by_status(&entries));

    Ok(())
}
