//! Built-in route table used when no route file is configured

use clearway_domain::model::{Corridor, RoutePath, RouteTable, Segment};

pub const DEFAULT_ORIGIN: &str = "Pari Chowk";
pub const DEFAULT_DESTINATION: &str = "Galgotias University";

/// (width, height) per segment, meters
const DEFAULT_PATHS: [[(f64, f64); 3]; 3] = [
    [(3.0, 3.0), (2.0, 4.0), (5.0, 2.0)],
    [(4.0, 4.0), (3.0, 3.0), (6.0, 3.0)],
    [(2.0, 2.0), (4.0, 5.0), (3.0, 3.0)],
];

pub fn default_route_table() -> RouteTable {
    let paths = DEFAULT_PATHS
        .iter()
        .map(|segments| {
            RoutePath::new(
                segments
                    .iter()
                    .map(|&(width, height)| Segment::new(width, height))
                    .collect(),
            )
        })
        .collect();

    RouteTable::new(vec![Corridor::new(DEFAULT_ORIGIN, DEFAULT_DESTINATION, paths)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = default_route_table();
        assert!(table.validate().is_ok());
        assert_eq!(table.path_count(), 3);
    }

    #[test]
    fn test_default_totals() {
        let table = default_route_table();
        let totals: Vec<(f64, f64)> = table.corridors[0]
            .paths
            .iter()
            .map(|p| {
                let t = p.totals();
                (t.width, t.height)
            })
            .collect();
        assert_eq!(totals, vec![(10.0, 9.0), (13.0, 10.0), (9.0, 10.0)]);
    }
}
