//! CLI definition using clap

use clap::{Parser, Subcommand};
use clearway_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clearway")]
#[command(version)]
#[command(about = "Find the shortest path a vehicle fits through")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging; RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate candidate paths for a vehicle
    Evaluate {
        /// Starting location (e.g., "Pari Chowk")
        start: String,

        /// Destination (e.g., "Galgotias University")
        destination: String,

        /// Vehicle width in meters
        #[arg(long, short = 'w', allow_negative_numbers = true)]
        width: f64,

        /// Vehicle height in meters
        #[arg(long = "height", short = 'H', allow_negative_numbers = true)]
        height: f64,

        /// Route table file (TOML or CSV). Overrides config.
        #[arg(long, short = 'r')]
        routes: Option<PathBuf>,
    },

    /// List corridors and their candidate paths
    Routes {
        /// Route table file (TOML or CSV). Overrides config.
        #[arg(long, short = 'r')]
        routes: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default route table file
        #[arg(long)]
        set_routes: Option<PathBuf>,

        /// Use the built-in route table again
        #[arg(long)]
        clear_routes: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set length of the longest chart bar
        #[arg(long)]
        set_chart_width: Option<usize>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::try_parse_from([
            "clearway", "evaluate", "Pari Chowk", "Galgotias University", "-w", "5", "--height", "4.5", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Evaluate { start, width, height, routes, .. } => {
                assert_eq!(start, "Pari Chowk");
                assert_eq!(width, 5.0);
                assert_eq!(height, 4.5);
                assert!(routes.is_none());
            }
            _ => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_negative_width_reaches_validation() {
        let cli = Cli::try_parse_from(["clearway", "evaluate", "A", "B", "-w", "-2", "-H", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Evaluate { width, .. } if width == -2.0));
    }
}
