//! Application service layer - use cases, config, built-in routes

pub mod config;
pub mod constants;
pub mod planner;
pub mod repository;
