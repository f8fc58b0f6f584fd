//! Start/destination validation and corridor lookup

use clearway_types::{Error, Result};

use crate::model::Corridor;

/// Case- and whitespace-insensitive form of a location name
pub fn normalize_location(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Find the corridor serving `start` -> `destination`
///
/// Identical endpoints are rejected before any lookup happens.
pub fn find_corridor<'a>(corridors: &'a [Corridor], start: &str, destination: &str) -> Result<&'a Corridor> {
    let start_key = normalize_location(start);
    let destination_key = normalize_location(destination);

    if start_key == destination_key {
        return Err(Error::InvalidLocationPair);
    }

    corridors
        .iter()
        .find(|c| normalize_location(&c.origin) == start_key && normalize_location(&c.destination) == destination_key)
        .ok_or_else(|| Error::InvalidLocationValue {
            start: start.trim().to_string(),
            destination: destination.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoutePath, Segment};

    fn corridors() -> Vec<Corridor> {
        vec![Corridor::new(
            "Pari Chowk",
            "Galgotias University",
            vec![RoutePath::new(vec![Segment::new(1.0, 1.0)])],
        )]
    }

    #[test]
    fn test_match_ignores_case_and_whitespace() {
        let corridors = corridors();
        let found = find_corridor(&corridors, "  pari CHOWK ", "galgotias university\t").unwrap();
        assert_eq!(found.origin, "Pari Chowk");
    }

    #[test]
    fn test_same_location_rejected_first() {
        // Neither endpoint exists in the table; the pair check still wins.
        let err = find_corridor(&corridors(), "Noida", " noida ").unwrap_err();
        assert!(matches!(err, Error::InvalidLocationPair));
    }

    #[test]
    fn test_unknown_location() {
        let err = find_corridor(&corridors(), "Pari Chowk", "Delhi").unwrap_err();
        match err {
            Error::InvalidLocationValue { start, destination } => {
                assert_eq!(start, "Pari Chowk");
                assert_eq!(destination, "Delhi");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_direction_matters() {
        let err = find_corridor(&corridors(), "Galgotias University", "Pari Chowk").unwrap_err();
        assert!(matches!(err, Error::InvalidLocationValue { .. }));
    }
}
