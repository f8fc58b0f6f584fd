//! Domain services

pub mod location;
pub mod path_evaluator;
pub mod route_report;

pub use location::{find_corridor, normalize_location};
pub use path_evaluator::{evaluate_paths, Evaluation, PathEvaluation};
pub use route_report::{build_route_report, generate_route_report, ChartBar, PathSummary, RouteReport};
