//! Domain model types

pub mod corridor;
pub mod route_path;
pub mod segment;
pub mod vehicle;

pub use corridor::{Corridor, RouteTable};
pub use route_path::{PathTotals, RoutePath};
pub use segment::Segment;
pub use vehicle::Vehicle;
