//! File-based implementation of RouteRepository

use std::path::{Path, PathBuf};

use clearway_domain::model::{Corridor, RouteTable};
use clearway_domain::repository::RouteRepository;
use clearway_types::{Error, Result};

use crate::route_csv::load_routes_from_csv;
use crate::route_loader::load_routes_from_toml;

/// On-disk route table format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFileFormat {
    Toml,
    Csv,
}

impl RouteFileFormat {
    /// `.csv` selects CSV; anything else is read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => RouteFileFormat::Csv,
            _ => RouteFileFormat::Toml,
        }
    }
}

/// Route repository backed by a TOML or CSV file
pub struct FileRouteRepository {
    table: RouteTable,
}

impl FileRouteRepository {
    /// Open and validate a route file
    pub fn open(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Route file not found: {}",
                path.display()
            )));
        }
        let table = Self::read(&path)?;
        log::info!(
            "loaded {} corridors ({} paths) from {}",
            table.corridors.len(),
            table.path_count(),
            path.display()
        );
        Ok(Self { table })
    }

    fn read(path: &Path) -> Result<RouteTable> {
        match RouteFileFormat::from_path(path) {
            RouteFileFormat::Csv => load_routes_from_csv(path),
            RouteFileFormat::Toml => load_routes_from_toml(path),
        }
    }
}

impl RouteRepository for FileRouteRepository {
    fn find_all(&self) -> Result<Vec<Corridor>> {
        self.table.find_all()
    }

    fn find_corridor(&self, start: &str, destination: &str) -> Result<Corridor> {
        self.table.find_corridor(start, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(RouteFileFormat::from_path(Path::new("r.CSV")), RouteFileFormat::Csv);
        assert_eq!(RouteFileFormat::from_path(Path::new("r.toml")), RouteFileFormat::Toml);
        assert_eq!(RouteFileFormat::from_path(Path::new("routes")), RouteFileFormat::Toml);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileRouteRepository::open(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_open_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.csv");
        std::fs::write(&path, "origin,destination,path,width,height\nA,B,P,2,2\nA,B,Q,1,1\n").unwrap();

        let repo = FileRouteRepository::open(path).unwrap();
        let corridor = repo.find_corridor("a", "b").unwrap();
        assert_eq!(corridor.paths.len(), 2);
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_open_toml_rejects_invalid_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.toml");
        std::fs::write(&path, "corridors = []\n").unwrap();
        assert!(matches!(FileRouteRepository::open(path), Err(Error::Config(_))));
    }
}
