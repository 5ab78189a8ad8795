//! Bounded, ordered sequence of location handles.

use hops_registry::{LocationHandle, LocationRegistry};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("route capacity of {capacity} hops exceeded")]
pub struct RouteFull {
    pub capacity: usize,
}

/// Ordered hops from the start towards the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    hops: Vec<LocationHandle>,
    capacity: usize,
}

impl Route {
    /// Empty route able to hold `capacity` hops.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hops: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, handle: LocationHandle) -> Result<(), RouteFull> {
        if self.hops.len() >= self.capacity {
            return Err(RouteFull {
                capacity: self.capacity,
            });
        }
        self.hops.push(handle);
        Ok(())
    }

    /// Drop every hop past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.hops.truncate(len);
    }

    /// Membership over the filled hops only.
    pub fn contains(&self, handle: LocationHandle) -> bool {
        self.hops.contains(&handle)
    }

    pub fn first(&self) -> Option<LocationHandle> {
        self.hops.first().copied()
    }

    pub fn last(&self) -> Option<LocationHandle> {
        self.hops.last().copied()
    }

    pub fn hops(&self) -> &[LocationHandle] {
        &self.hops
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when the route runs from the start slot to the end slot.
    pub fn is_complete(&self) -> bool {
        self.first() == Some(LocationHandle::Start) && self.last() == Some(LocationHandle::End)
    }

    /// Location ids in hop order. Handles missing from `registry` are skipped.
    pub fn ids<'a>(&self, registry: &'a LocationRegistry) -> Vec<&'a str> {
        self.hops
            .iter()
            .filter_map(|handle| registry.get(*handle))
            .map(|location| location.id.as_str())
            .collect()
    }
}
