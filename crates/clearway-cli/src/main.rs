//! Clearway - vehicle clearance and shortest path selection
//!
//! A CLI tool that checks which candidate paths a vehicle fits through and
//! picks the shortest of them.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        if e.is_user_input() {
            eprintln!("Run `clearway routes` to see the supported locations.");
        }
        std::process::exit(1);
    }
}
