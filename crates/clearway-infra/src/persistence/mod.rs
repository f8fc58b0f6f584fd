//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_route_repo;

pub use file_route_repo::{FileRouteRepository, RouteFileFormat};
