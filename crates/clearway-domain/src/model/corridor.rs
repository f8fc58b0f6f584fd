//! Corridor and route table definitions

use serde::{Deserialize, Serialize};

use clearway_types::{ConfigError, Error, Result};

use super::RoutePath;
use crate::service::location::normalize_location;

/// Candidate paths between one origin and one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub paths: Vec<RoutePath>,
}

impl Corridor {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, paths: Vec<RoutePath>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            paths,
        }
    }

    /// "Origin -> Destination"
    pub fn name(&self) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }

    /// Check the corridor is usable for evaluation
    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(ConfigError::ParseError(format!(
                "corridor '{}' has an empty origin or destination",
                self.name()
            ))
            .into());
        }
        if normalize_location(&self.origin) == normalize_location(&self.destination) {
            return Err(ConfigError::ParseError(format!(
                "corridor '{}' starts and ends at the same location",
                self.name()
            ))
            .into());
        }
        if self.paths.is_empty() {
            return Err(ConfigError::ParseError(format!("corridor '{}' has no paths", self.name())).into());
        }

        for (path_idx, path) in self.paths.iter().enumerate() {
            if path.segments.is_empty() {
                return Err(ConfigError::ParseError(format!(
                    "{} of corridor '{}' has no segments",
                    path.display_label(path_idx),
                    self.name()
                ))
                .into());
            }
            for (seg_idx, segment) in path.segments.iter().enumerate() {
                segment.check().map_err(|reason| Error::InvalidSegment {
                    corridor: self.name(),
                    path: path.display_label(path_idx),
                    index: seg_idx + 1,
                    reason,
                })?;
            }
        }
        Ok(())
    }
}

/// All corridors known to the planner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    pub corridors: Vec<Corridor>,
}

impl RouteTable {
    pub fn new(corridors: Vec<Corridor>) -> Self {
        Self { corridors }
    }

    pub fn validate(&self) -> Result<()> {
        if self.corridors.is_empty() {
            return Err(ConfigError::ParseError("route table has no corridors".to_string()).into());
        }
        self.corridors.iter().try_for_each(Corridor::validate)
    }

    pub fn path_count(&self) -> usize {
        self.corridors.iter().map(|c| c.paths.len()).sum()
    }
}
