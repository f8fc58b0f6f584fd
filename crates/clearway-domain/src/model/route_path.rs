//! Candidate path definitions

use serde::{Deserialize, Serialize};

use super::Segment;

/// Summed dimensions of a path
///
/// Widths and heights are summed independently across segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathTotals {
    pub width: f64,
    pub height: f64,
}

impl PathTotals {
    /// Euclidean length of the (width, height) vector
    pub fn distance(&self) -> f64 {
        (self.width.powi(2) + self.height.powi(2)).sqrt()
    }
}

/// Ordered sequence of segments between a corridor's endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    /// Display label; falls back to "Path N" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub segments: Vec<Segment>,
}

impl RoutePath {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            label: None,
            segments,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label for the path at `index` in its corridor (0-based)
    pub fn display_label(&self, index: usize) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("Path {}", index + 1),
        }
    }

    pub fn totals(&self) -> PathTotals {
        let (width, height) = self
            .segments
            .iter()
            .fold((0.0, 0.0), |(w, h), s| (w + s.width, h + s.height));
        PathTotals { width, height }
    }

    /// Sum of segment areas in square meters
    pub fn area(&self) -> f64 {
        self.segments.iter().map(Segment::area).sum()
    }

    /// Segment list as "3m x 3m, 2m x 4m"
    pub fn dimensions_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoutePath {
        RoutePath::new(vec![
            Segment::new(3.0, 3.0),
            Segment::new(2.0, 4.0),
            Segment::new(5.0, 2.0),
        ])
    }

    #[test]
    fn test_totals_sum_independently() {
        let totals = sample().totals();
        assert_eq!(totals.width, 10.0);
        assert_eq!(totals.height, 9.0);
    }

    #[test]
    fn test_area_and_text() {
        let path = sample();
        assert_eq!(path.area(), 27.0);
        assert_eq!(path.dimensions_text(), "3m x 3m, 2m x 4m, 5m x 2m");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(sample().display_label(0), "Path 1");
        assert_eq!(sample().with_label("North gate").display_label(0), "North gate");
    }

    #[test]
    fn test_empty_path_totals_are_zero() {
        let totals = RoutePath::new(Vec::new()).totals();
        assert_eq!(totals.width, 0.0);
        assert_eq!(totals.distance(), 0.0);
    }
}
