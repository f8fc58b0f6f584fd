//! Repository trait definitions for route data

use clearway_types::Result;

use crate::model::{Corridor, RouteTable};
use crate::service::location::find_corridor;

/// Source of corridors and their candidate paths
pub trait RouteRepository {
    /// Load all corridors
    fn find_all(&self) -> Result<Vec<Corridor>>;

    /// Find the corridor serving `start` -> `destination`
    ///
    /// Fails with `InvalidLocationPair` or `InvalidLocationValue`.
    fn find_corridor(&self, start: &str, destination: &str) -> Result<Corridor> {
        let corridors = self.find_all()?;
        find_corridor(&corridors, start, destination).cloned()
    }
}

impl RouteRepository for RouteTable {
    fn find_all(&self) -> Result<Vec<Corridor>> {
        Ok(self.corridors.clone())
    }

    fn find_corridor(&self, start: &str, destination: &str) -> Result<Corridor> {
        find_corridor(&self.corridors, start, destination).cloned()
    }
}
