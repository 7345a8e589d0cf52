//! Configuration loading
//!
//! Scoring constants come from an optional TOML/YAML file layered over the
//! calibrated defaults in [`crate::domain::ScoringConfig`].

pub mod loader;

pub use loader::load_config;
