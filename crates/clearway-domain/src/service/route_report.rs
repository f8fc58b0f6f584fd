//! Route report generation
//!
//! Turns an [`Evaluation`] into the data shown to the user: a summary
//! message, distances of the paths that were not selected, and one chart bar
//! per path (cross-section area with a dimensions tooltip).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Corridor, PathTotals, Vehicle};
use crate::service::path_evaluator::Evaluation;

/// Upper bound on the rendered length of the longest chart bar
pub const MAX_CHART_WIDTH: usize = 200;

/// Per-path row of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    pub index: usize,
    pub label: String,
    pub totals: PathTotals,
    pub distance: f64,
    pub feasible: bool,
    pub shortest: bool,
}

/// One bar of the path dimensions chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    /// Sum of segment areas, square meters
    pub value: f64,
    pub tooltip: String,
}

/// Everything needed to present an evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteReport {
    pub origin: String,
    pub destination: String,
    pub vehicle: Vehicle,
    pub evaluated_at: DateTime<Utc>,
    pub paths: Vec<PathSummary>,
    pub feasible: Vec<usize>,
    pub shortest: Vec<usize>,
    pub shortest_distance: Option<f64>,
    pub chart: Vec<ChartBar>,
}

impl RouteReport {
    /// Success or failure message lines
    pub fn summary_lines(&self) -> Vec<String> {
        match self.shortest_distance {
            Some(distance) => {
                let labels: Vec<&str> = self
                    .paths
                    .iter()
                    .filter(|p| p.shortest)
                    .map(|p| p.label.as_str())
                    .collect();
                vec![
                    format!("Shortest distance for emergency vehicle: {:.2} m", distance),
                    format!("Valid paths for the vehicle: {}", labels.join(", ")),
                ]
            }
            None => vec!["No valid paths found for the vehicle.".to_string()],
        }
    }

    /// Paths outside the shortest set, feasible or not
    pub fn other_paths(&self) -> impl Iterator<Item = &PathSummary> {
        self.paths.iter().filter(|p| !p.shortest)
    }
}

pub fn build_route_report(corridor: &Corridor, vehicle: &Vehicle, evaluation: &Evaluation) -> RouteReport {
    let paths: Vec<PathSummary> = corridor
        .paths
        .iter()
        .zip(&evaluation.per_path)
        .map(|(path, e)| PathSummary {
            index: e.index,
            label: path.display_label(e.index),
            totals: e.totals,
            distance: e.distance,
            feasible: e.feasible,
            shortest: evaluation.is_shortest(e.index),
        })
        .collect();

    let chart = corridor
        .paths
        .iter()
        .zip(&paths)
        .map(|(path, summary)| ChartBar {
            label: summary.label.clone(),
            value: path.area(),
            tooltip: format!(
                "Dimensions: {} | Distance: {:.2} meters",
                path.dimensions_text(),
                summary.distance
            ),
        })
        .collect();

    RouteReport {
        origin: corridor.origin.clone(),
        destination: corridor.destination.clone(),
        vehicle: *vehicle,
        evaluated_at: Utc::now(),
        paths,
        feasible: evaluation.feasible.clone(),
        shortest: evaluation.shortest.clone(),
        shortest_distance: evaluation.shortest_distance,
        chart,
    }
}

/// Render a report as plain text with a horizontal bar chart
///
/// `chart_width` is the length in characters of the longest bar, capped at
/// [`MAX_CHART_WIDTH`].
pub fn generate_route_report(report: &RouteReport, chart_width: usize) -> String {
    let chart_width = chart_width.min(MAX_CHART_WIDTH);
    let mut out = String::new();
    out.push_str("==================================================\n");
    out.push_str("                Route Clearance Report            \n");
    out.push_str("==================================================\n\n");
    out.push_str(&format!("  Route:    {} -> {}\n", report.origin, report.destination));
    out.push_str(&format!(
        "  Vehicle:  {}m wide x {}m high\n\n",
        report.vehicle.width, report.vehicle.height
    ));

    for line in report.summary_lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out.push('\n');

    out.push_str(&format!(
        "{:<16} {:>8} {:>8} {:>10} {:>9}\n",
        "Path", "Width", "Height", "Distance", "Fits"
    ));
    out.push_str("-".repeat(55).as_str());
    out.push('\n');
    for p in &report.paths {
        let marker = if p.shortest { " *" } else { "" };
        out.push_str(&format!(
            "{:<16} {:>7.2}m {:>7.2}m {:>9.2}m {:>9}\n",
            truncate_str(&format!("{}{}", p.label, marker), 16),
            p.totals.width,
            p.totals.height,
            p.distance,
            if p.feasible { "yes" } else { "no" }
        ));
    }
    out.push('\n');

    let others: Vec<&PathSummary> = report.other_paths().collect();
    if !others.is_empty() {
        out.push_str("Distances of other paths compared to the shortest one:\n");
        for p in others {
            out.push_str(&format!("  {}: {:.2} m\n", p.label, p.distance));
        }
        out.push('\n');
    }

    out.push_str("Path Dimensions (sq. meters)\n");
    let max_value = report.chart.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    for bar in &report.chart {
        let len = if max_value > 0.0 {
            ((bar.value / max_value) * chart_width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<16} {} {:.2}\n",
            truncate_str(&bar.label, 16),
            "█".repeat(len),
            bar.value
        ));
    }
    out.push('\n');
    out.push_str("==================================================\n");
    out
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
