//! Vehicle type definitions

use serde::{Deserialize, Serialize};

use clearway_types::{Dimension, Error, Result};

/// Vehicle envelope that must fit through a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub width: f64,
    pub height: f64,
}

impl Vehicle {
    /// Build a vehicle, rejecting non-finite or non-positive dimensions
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let vehicle = Self { width, height };
        vehicle.validate()?;
        Ok(vehicle)
    }

    pub fn validate(&self) -> Result<()> {
        for (dimension, value) in [(Dimension::Width, self.width), (Dimension::Height, self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidVehicleDimension { dimension, value });
            }
        }
        Ok(())
    }
}
