//! Repository adapters for route data

use std::path::PathBuf;

use clearway_domain::repository::RouteRepository;
use clearway_infra::persistence::FileRouteRepository;
use clearway_types::Result;

use crate::config::Config;
use crate::constants::default_route_table;

/// Open the route repository selected by `routes_override` or the config
///
/// Falls back to the built-in table when neither names a file.
pub fn open_route_repo(config: &Config, routes_override: Option<PathBuf>) -> Result<Box<dyn RouteRepository>> {
    match routes_override.or_else(|| config.routes_file.clone()) {
        Some(path) => Ok(Box::new(FileRouteRepository::open(path)?)),
        None => {
            log::debug!("using built-in route table");
            Ok(Box::new(default_route_table()))
        }
    }
}
