//! Depth-first route builder chaining mutually visible hops from the start to the end.
//!
//! The search always works from the hop that was last in the route when a step began.
//! It first checks whether that hop can see the end directly, then scans relays in
//! registry order and descends into the first visible one that is not yet routed.
//!
//! Two strategies differ only in what happens after a branch dead-ends:
//!
//! * [`SearchStrategy::FirstFit`] leaves the failed hops in the route and keeps scanning
//!   from the same hop. The result is a greedy first-fit chain, not a shortest path, and
//!   a successful route may contain hops that do not see their successor.
//! * [`SearchStrategy::Backtracking`] removes the failed branch before the next candidate,
//!   so every consecutive pair in a line-of-sight route is mutually visible.

use hops_geometry::is_visible;
use hops_registry::{Location, LocationHandle, LocationRegistry};
use thiserror::Error;

use crate::route::{Route, RouteFull};

/// Treatment of hops appended by a branch that failed to reach the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    #[default]
    FirstFit,
    Backtracking,
}

/// How a successful search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The last relay sees the end.
    LineOfSight,
    /// The hop limit forced the end onto the route. Best effort only: the final
    /// leg is not guaranteed to be in line of sight.
    HopLimit,
}

/// Result of a route search. On failure `route` keeps whatever was accumulated.
#[derive(Debug, Clone)]
pub struct RouteSearch {
    pub completion: Option<Completion>,
    pub route: Route,
}

impl RouteSearch {
    pub fn is_success(&self) -> bool {
        self.completion.is_some()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no start location registered")]
    MissingStart,
    #[error("no end location registered")]
    MissingEnd,
    #[error(transparent)]
    CapacityExceeded(#[from] RouteFull),
}

/// Builds a single route over a loaded registry.
#[derive(Debug, Clone)]
pub struct RouteBuilder<'a> {
    registry: &'a LocationRegistry,
    strategy: SearchStrategy,
    max_hops: usize,
}

impl<'a> RouteBuilder<'a> {
    pub fn new(registry: &'a LocationRegistry) -> Self {
        Self {
            registry,
            strategy: SearchStrategy::default(),
            max_hops: registry.capacity() + 1,
        }
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Route length at which the end is appended unconditionally.
    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Run the search from `[start]`.
    pub fn build(&self) -> Result<RouteSearch, RouteError> {
        self.registry.start().ok_or(RouteError::MissingStart)?;
        let end = self.registry.end().ok_or(RouteError::MissingEnd)?;

        let mut route = Route::with_capacity(self.registry.capacity() + 2);
        route.push(LocationHandle::Start)?;
        let completion = self.extend(&mut route, end)?;

        match completion {
            Some(kind) => tracing::debug!(hops = route.len(), ?kind, "route complete"),
            None => tracing::debug!(hops = route.len(), "no route to end"),
        }
        Ok(RouteSearch { completion, route })
    }

    fn extend(&self, route: &mut Route, end: &Location) -> Result<Option<Completion>, RouteError> {
        let Some(current_handle) = route.last() else {
            return Ok(None);
        };
        let Some(current) = self.registry.get(current_handle) else {
            return Ok(None);
        };

        if is_visible(current, end) {
            route.push(LocationHandle::End)?;
            return Ok(Some(Completion::LineOfSight));
        }
        if route.len() >= self.max_hops {
            tracing::debug!(
                max_hops = self.max_hops,
                "hop limit reached; closing route without line of sight"
            );
            route.push(LocationHandle::End)?;
            return Ok(Some(Completion::HopLimit));
        }

        for (index, relay) in self.registry.satellites().iter().enumerate() {
            let candidate = LocationHandle::Relay(index);
            if candidate == current_handle || route.contains(candidate) {
                continue;
            }
            if !is_visible(current, relay) {
                continue;
            }

            let mark = route.len();
            route.push(candidate)?;
            tracing::trace!(from = %current.id, to = %relay.id, "trying hop");
            if let Some(completion) = self.extend(route, end)? {
                return Ok(Some(completion));
            }
            if self.strategy == SearchStrategy::Backtracking {
                route.truncate(mark);
            }
        }

        Ok(None)
    }
}
