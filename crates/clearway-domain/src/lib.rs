//! Domain layer for clearway
//!
//! Route model types, the path evaluator, and the repository seam used to
//! look up corridors.

pub mod model;
pub mod repository;
pub mod service;
