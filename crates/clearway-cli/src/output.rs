//! Output formatting module

use clearway_app::planner::CorridorOverview;
use clearway_domain::service::{generate_route_report, RouteReport};
use clearway_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &RouteReport, chart_width: usize) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            let content = serde_json::to_string_pretty(report)?;
            println!("{}", content);
        }
        OutputFormat::Table => {
            println!("{}", generate_route_report(report, chart_width));
        }
    }
    Ok(())
}

pub fn output_routes(output_format: OutputFormat, corridors: &[CorridorOverview]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(corridors)?);
        return Ok(());
    }

    for corridor in corridors {
        println!("\n{} -> {}", corridor.origin, corridor.destination);
        println!("{}", "=".repeat(60));
        println!(
            "{:<14} {:>8} {:>8} {:>10} {:>9}",
            "Path", "Width", "Height", "Distance", "Area"
        );
        println!("{}", "-".repeat(60));
        for p in &corridor.paths {
            println!(
                "{:<14} {:>7.2}m {:>7.2}m {:>9.2}m {:>7.2}m²",
                p.label, p.total_width, p.total_height, p.distance, p.area
            );
            println!("  {}", p.segments);
        }
    }
    Ok(())
}
