use std::path::PathBuf;

use clap::Parser;
use derive_getters::Getters;

#[derive(Parser, Debug, Getters)]
#[command(name = "noise-maker")]
#[command(about = "Generate fake access-log files for testing", long_about = None)]
pub struct CliArgs {
    #[arg(long, default_value = "server.log")]
    out: PathBuf,

    #[arg(long, default_value_t = 1000)]
    lines: usize,

    /// Share of unparsable noise lines, in percent.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(0..=100))]
    noise_percent: u8,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}
