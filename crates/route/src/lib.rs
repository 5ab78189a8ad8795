//! Relay route construction: a bounded route buffer and the depth-first builder that fills it.

pub mod builder;
pub mod route;

pub use builder::{Completion, RouteBuilder, RouteError, RouteSearch, SearchStrategy};
pub use route::{Route, RouteFull};
