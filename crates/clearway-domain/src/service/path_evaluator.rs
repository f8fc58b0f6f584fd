//! Path feasibility and shortest-path selection

use serde::{Deserialize, Serialize};

use clearway_types::Result;

use crate::model::{PathTotals, RoutePath, Vehicle};

/// Outcome for a single candidate path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEvaluation {
    pub index: usize,
    pub totals: PathTotals,
    pub distance: f64,
    pub feasible: bool,
}

/// Outcome for a whole candidate list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub per_path: Vec<PathEvaluation>,
    /// Indices of paths the vehicle fits through, ascending
    pub feasible: Vec<usize>,
    /// Feasible indices tied at the minimal distance, ascending
    pub shortest: Vec<usize>,
    pub shortest_distance: Option<f64>,
}

impl Evaluation {
    pub fn has_route(&self) -> bool {
        self.shortest_distance.is_some()
    }

    pub fn is_shortest(&self, index: usize) -> bool {
        self.shortest.contains(&index)
    }
}

/// Evaluate every path against the vehicle
///
/// A path is feasible when its summed width and summed height both meet or
/// exceed the vehicle's. Distance ties are detected by exact equality.
pub fn evaluate_paths(paths: &[RoutePath], vehicle: &Vehicle) -> Result<Evaluation> {
    vehicle.validate()?;

    let per_path: Vec<PathEvaluation> = paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            let totals = path.totals();
            let feasible = totals.width >= vehicle.width && totals.height >= vehicle.height;
            log::debug!(
                "path {}: totals {}x{}, distance {:.4}, feasible={}",
                index + 1,
                totals.width,
                totals.height,
                totals.distance(),
                feasible
            );
            PathEvaluation {
                index,
                totals,
                distance: totals.distance(),
                feasible,
            }
        })
        .collect();

    let feasible: Vec<usize> = per_path.iter().filter(|p| p.feasible).map(|p| p.index).collect();

    let shortest_distance = per_path
        .iter()
        .filter(|p| p.feasible)
        .map(|p| p.distance)
        .fold(None, |best: Option<f64>, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        });

    let shortest = match shortest_distance {
        Some(min) => per_path
            .iter()
            .filter(|p| p.feasible && p.distance == min)
            .map(|p| p.index)
            .collect(),
        None => Vec::new(),
    };

    Ok(Evaluation {
        per_path,
        feasible,
        shortest,
        shortest_distance,
    })
}
