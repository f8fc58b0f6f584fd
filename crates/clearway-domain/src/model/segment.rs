//! Path segment type definitions

use serde::{Deserialize, Serialize};

/// One width/height unit of a path, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub width: f64,
    pub height: f64,
}

impl Segment {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Cross-section area in square meters
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check both dimensions are positive finite numbers
    ///
    /// Returns a human-readable reason on failure.
    pub fn check(&self) -> Result<(), String> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() {
                return Err(format!("{} is not a finite number ({})", name, value));
            }
            if value <= 0.0 {
                return Err(format!("{} must be positive ({})", name, value));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m x {}m", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_tooltip_format() {
        assert_eq!(Segment::new(3.0, 2.5).to_string(), "3m x 2.5m");
    }

    #[test]
    fn test_check_rejects_bad_dimensions() {
        assert!(Segment::new(1.0, 1.0).check().is_ok());
        assert!(Segment::new(0.0, 1.0).check().is_err());
        assert!(Segment::new(1.0, -2.0).check().is_err());
        assert!(Segment::new(f64::NAN, 1.0).check().is_err());
        assert!(Segment::new(1.0, f64::INFINITY).check().is_err());
    }
}
