/// Environment variable helpers used by the configuration layer
pub mod config;
/// Module containing logging utilities
pub mod logger;

pub use logger::*;
