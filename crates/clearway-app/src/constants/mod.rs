//! Constants for route evaluation

pub mod default_routes;

pub use default_routes::{default_route_table, DEFAULT_DESTINATION, DEFAULT_ORIGIN};
