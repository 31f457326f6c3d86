mod args;
mod generator;

use std::fs;

use args::CliArgs;
use chrono::{Duration, Utc};
use clap::Parser;
use generator::{generate_log_line, generate_noise_line};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let mut timestamp = Utc::now();
    let mut buffer = String::with_capacity(args.lines() * 64);
    for _ in 0..*args.lines() {
        let line = if rng.random_range(0..100u8) < *args.noise_percent() {
            generate_noise_line(&mut rng)
        } else {
            generate_log_line(&mut rng, timestamp)
        };
        buffer.push_str(&line);
        buffer.push('\n');
        timestamp += Duration::minutes(rng.random_range(0..=3));
    }
    fs::write(args.out(), buffer)
        .map_err(|e| format!("failed to write {}: {e}", args.out().display()))?;

    println!(
        "Wrote {} lines ({}% noise) to {}",
        args.lines(),
        args.noise_percent(),
        args.out().display()
    );
    Ok(())
}
