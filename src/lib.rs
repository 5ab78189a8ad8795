//! Multi-hop relay routing between two ground locations through a satellite constellation.
//!
//! The workspace crates are re-exported here so the binary and integration tests
//! share one entry point. [`session::plan_route`] runs a whole load-and-search pass.

pub mod session;

pub use hops_config as config;
pub use hops_core as core;
pub use hops_export as export;
pub use hops_geometry as geometry;
pub use hops_importer as importer;
pub use hops_registry as registry;
pub use hops_route as route;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
