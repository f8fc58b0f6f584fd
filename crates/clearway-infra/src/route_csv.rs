//! CSV loader for route tables
//!
//! One segment per row. Rows are grouped into corridors by
//! (origin, destination) and into paths by the `path` column, keeping the
//! order in which they first appear.
//!
//! Expected CSV header:
//! origin,destination,path,width,height

use std::fs::File;
use std::path::Path;

use thiserror::Error;

use clearway_domain::model::{Corridor, RoutePath, RouteTable, Segment};
use clearway_domain::service::normalize_location;
use clearway_types::{ConfigError, Error};

const REQUIRED_COLUMNS: [&str; 5] = ["origin", "destination", "path", "width", "height"];

#[derive(Error, Debug)]
pub enum RouteCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Empty value in row {row}, column {column}")]
    EmptyValue { row: usize, column: String },
}

impl From<RouteCsvError> for Error {
    fn from(e: RouteCsvError) -> Self {
        match e {
            RouteCsvError::IoError(e) => Error::Io(e),
            RouteCsvError::CsvError(e) => Error::Csv(e),
            other => Error::Config(ConfigError::ParseError(other.to_string())),
        }
    }
}

/// Load and validate a route table from a CSV file
pub fn load_routes_from_csv<P: AsRef<Path>>(path: P) -> Result<RouteTable, Error> {
    let file = File::open(path).map_err(RouteCsvError::from)?;
    let table = read_routes_csv(file)?;
    table.validate()?;
    Ok(table)
}

/// Parse a route table from any CSV reader without validating it
pub fn read_routes_csv<R: std::io::Read>(reader: R) -> Result<RouteTable, RouteCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = column_positions(&headers)?;

    let mut corridors: Vec<Corridor> = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // +2: 0-based index plus the header row
        let row = row_idx + 2;

        let origin = required_field(&record, columns[0], row, "origin")?;
        let destination = required_field(&record, columns[1], row, "destination")?;
        let path_label = required_field(&record, columns[2], row, "path")?;
        let width = parse_f64(required_field(&record, columns[3], row, "width")?, row, "width")?;
        let height = parse_f64(required_field(&record, columns[4], row, "height")?, row, "height")?;

        let corridor_pos = match corridors.iter().position(|c| {
            normalize_location(&c.origin) == normalize_location(origin)
                && normalize_location(&c.destination) == normalize_location(destination)
        }) {
            Some(pos) => pos,
            None => {
                corridors.push(Corridor::new(origin, destination, Vec::new()));
                corridors.len() - 1
            }
        };
        let corridor = &mut corridors[corridor_pos];

        let path_pos = match corridor
            .paths
            .iter()
            .position(|p| p.label.as_deref() == Some(path_label))
        {
            Some(pos) => pos,
            None => {
                corridor.paths.push(RoutePath::new(Vec::new()).with_label(path_label));
                corridor.paths.len() - 1
            }
        };
        corridor.paths[path_pos].segments.push(Segment::new(width, height));
    }

    Ok(RouteTable::new(corridors))
}

fn column_positions(headers: &csv::StringRecord) -> Result<[usize; 5], RouteCsvError> {
    let mut positions = [0usize; 5];
    for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| RouteCsvError::MissingColumn(name.to_string()))?;
    }
    Ok(positions)
}

fn required_field<'r>(
    record: &'r csv::StringRecord,
    position: usize,
    row: usize,
    column: &str,
) -> Result<&'r str, RouteCsvError> {
    match record.get(position) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RouteCsvError::EmptyValue {
            row,
            column: column.to_string(),
        }),
    }
}

fn parse_f64(s: &str, row: usize, column: &str) -> Result<f64, RouteCsvError> {
    s.trim().parse().map_err(|_| RouteCsvError::InvalidNumber {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
origin,destination,path,width,height
Pari Chowk,Galgotias University,Path 1,3,3
Pari Chowk,Galgotias University,Path 1,2,4
Pari Chowk,Galgotias University,Path 2,4,4
pari chowk,GALGOTIAS UNIVERSITY,Path 1,5,2
Knowledge Park,Sector 18,Main,6.5,4.2
";

    #[test]
    fn test_groups_rows_in_first_seen_order() {
        let table = read_routes_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.corridors.len(), 2);

        let first = &table.corridors[0];
        assert_eq!(first.origin, "Pari Chowk");
        assert_eq!(first.paths.len(), 2);
        assert_eq!(first.paths[0].segments.len(), 3);
        assert_eq!(first.paths[0].totals().width, 10.0);
        assert_eq!(first.paths[1].display_label(1), "Path 2");

        assert_eq!(table.corridors[1].paths[0].segments[0], Segment::new(6.5, 4.2));
    }

    #[test]
    fn test_column_order_is_free() {
        let csv = "width,height,path,destination,origin\n1.5,2,P,B,A\n";
        let table = read_routes_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.corridors[0].origin, "A");
        assert_eq!(table.corridors[0].paths[0].segments[0], Segment::new(1.5, 2.0));
    }

    #[test]
    fn test_missing_column() {
        let err = read_routes_csv("origin,destination,path,width\nA,B,P,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, RouteCsvError::MissingColumn(c) if c == "height"));
    }

    #[test]
    fn test_invalid_number_reports_row() {
        let err = read_routes_csv("origin,destination,path,width,height\nA,B,P,1,wide\n".as_bytes()).unwrap_err();
        match err {
            RouteCsvError::InvalidNumber { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "height");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_validates_segments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"origin,destination,path,width,height\nA,B,P,0,2\n").unwrap();
        let err = load_routes_from_csv(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidSegment { .. }));
    }
}
