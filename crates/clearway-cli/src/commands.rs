//! Command handlers

use std::path::PathBuf;

use clearway_app::config::Config;
use clearway_app::planner::{list_routes, plan_route, PlanRequest};
use clearway_app::repository::open_route_repo;
use clearway_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_report, output_routes};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Evaluate {
            start,
            destination,
            width,
            height,
            routes,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            let request = PlanRequest {
                start,
                destination,
                vehicle_width: width,
                vehicle_height: height,
            };
            cmd_evaluate(&config, request, routes, output_format)
        }

        Commands::Routes { routes } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_routes(&config, routes, output_format)
        }

        Commands::Config {
            show,
            set_routes,
            clear_routes,
            set_output,
            set_chart_width,
            reset,
        } => cmd_config(config, show, set_routes, clear_routes, set_output, set_chart_width, reset),
    }
}

fn cmd_evaluate(
    config: &Config,
    request: PlanRequest,
    routes: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let repo = open_route_repo(config, routes)?;
    let report = plan_route(repo.as_ref(), &request)?;
    output_report(output_format, &report, config.chart_width)
}

fn cmd_routes(config: &Config, routes: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let repo = open_route_repo(config, routes)?;
    let corridors = list_routes(repo.as_ref())?;
    output_routes(output_format, &corridors)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_routes: Option<PathBuf>,
    clear_routes: bool,
    set_output: Option<OutputFormat>,
    set_chart_width: Option<usize>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut modified = false;

    if let Some(path) = set_routes {
        // Stored absolute; commands may run from another directory
        let path = std::fs::canonicalize(&path).unwrap_or(path);
        config.routes_file = Some(path);
        modified = true;
    }

    if clear_routes {
        config.routes_file = None;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(width) = set_chart_width {
        config.chart_width = width;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
