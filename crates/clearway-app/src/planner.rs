//! Route planning use case

use serde::{Deserialize, Serialize};

use clearway_domain::model::{Corridor, Vehicle};
use clearway_domain::repository::RouteRepository;
use clearway_domain::service::{build_route_report, evaluate_paths, RouteReport};
use clearway_types::Result;

/// A user's evaluation request, as entered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub start: String,
    pub destination: String,
    pub vehicle_width: f64,
    pub vehicle_height: f64,
}

/// Validate the request and evaluate the matching corridor
///
/// Location checks run before anything else, so an invalid pair never
/// reaches the evaluator.
pub fn plan_route(repo: &dyn RouteRepository, request: &PlanRequest) -> Result<RouteReport> {
    let corridor = repo.find_corridor(&request.start, &request.destination)?;
    log::debug!("matched corridor {}", corridor.name());

    let vehicle = Vehicle::new(request.vehicle_width, request.vehicle_height)?;
    let evaluation = evaluate_paths(&corridor.paths, &vehicle)?;

    match evaluation.shortest_distance {
        Some(d) => log::info!(
            "{}: {} of {} paths fit, shortest {:.2}",
            corridor.name(),
            evaluation.feasible.len(),
            corridor.paths.len(),
            d
        ),
        None => log::info!("{}: no path fits {}x{}", corridor.name(), vehicle.width, vehicle.height),
    }

    Ok(build_route_report(&corridor, &vehicle, &evaluation))
}

/// Per-path overview of a corridor, independent of any vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorridorOverview {
    pub origin: String,
    pub destination: String,
    pub paths: Vec<PathOverview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathOverview {
    pub label: String,
    pub segments: String,
    pub total_width: f64,
    pub total_height: f64,
    pub distance: f64,
    pub area: f64,
}

pub fn list_routes(repo: &dyn RouteRepository) -> Result<Vec<CorridorOverview>> {
    Ok(repo.find_all()?.iter().map(overview).collect())
}

fn overview(corridor: &Corridor) -> CorridorOverview {
    CorridorOverview {
        origin: corridor.origin.clone(),
        destination: corridor.destination.clone(),
        paths: corridor
            .paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let totals = p.totals();
                PathOverview {
                    label: p.display_label(i),
                    segments: p.dimensions_text(),
                    total_width: totals.width,
                    total_height: totals.height,
                    distance: totals.distance(),
                    area: p.area(),
                }
            })
            .collect(),
    }
}
