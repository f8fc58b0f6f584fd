//! Route table loader from TOML configuration

use std::fs;
use std::path::Path;

use clearway_domain::model::RouteTable;
use clearway_types::{ConfigError, Error, Result};

/// Load and validate a route table from a TOML file
pub fn load_routes_from_toml(path: &Path) -> Result<RouteTable> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read route table {}: {}",
            path.display(),
            e
        )))
    })?;

    parse_routes_toml(&content)
}

/// Parse and validate a route table from a TOML string
pub fn parse_routes_toml(toml_content: &str) -> Result<RouteTable> {
    let table: RouteTable = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse route table TOML: {}",
            e
        )))
    })?;

    table.validate()?;
    log::debug!(
        "parsed route table: {} corridors, {} paths",
        table.corridors.len(),
        table.path_count()
    );
    Ok(table)
}
