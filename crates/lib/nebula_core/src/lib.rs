//! # nebula_core
//!
//! Core domain data for Nebula Sports.

pub mod models;
pub mod seed;
pub mod store;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
