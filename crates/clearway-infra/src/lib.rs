//! Infrastructure layer - route table loaders and file-backed repositories

pub mod persistence;
pub mod route_csv;
pub mod route_loader;
