//! Fixed-capacity registry of named locations: one start, one end, and the relay set.

use hops_core::constants::DEFAULT_RELAY_CAPACITY;
use hops_geometry::{Coordinates, CoordinateTransform, LatLon, Positioned};
use thiserror::Error;

/// Reserved id addressing the start slot.
pub const START_ID: &str = "START";
/// Reserved id addressing the end slot.
pub const END_ID: &str = "END";

/// Part a location plays in the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    End,
    Relay,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Start => "start",
            Role::End => "end",
            Role::Relay => "relay",
        }
    }
}

/// Opaque identity of a registered location.
///
/// Two locations with identical coordinates still have distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationHandle {
    Start,
    End,
    Relay(usize),
}

/// A named location with its derived Cartesian position.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: String,
    pub latlon: LatLon,
    pub coordinates: Coordinates,
    pub altitude_km: f64,
    pub role: Role,
}

impl Positioned for Location {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    fn altitude_km(&self) -> f64 {
        self.altitude_km
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("relay capacity of {capacity} exceeded while adding `{id}`")]
    CapacityExceeded { id: String, capacity: usize },
    #[error("relay id `{0}` is already registered")]
    DuplicateId(String),
    #[error("location `{id}` has negative altitude {altitude_km} km")]
    NegativeAltitude { id: String, altitude_km: f64 },
    #[error("location `{id}` has a non-finite latitude, longitude, or altitude")]
    NonFiniteValue { id: String },
}

/// Owns the start/end slots and a bounded, ordered relay collection.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    capacity: usize,
    transform: CoordinateTransform,
    start: Option<Location>,
    end: Option<Location>,
    relays: Vec<Location>,
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_CAPACITY)
    }
}

impl LocationRegistry {
    pub fn new(capacity: usize) -> Self {
        Self::with_transform(capacity, CoordinateTransform::default())
    }

    pub fn with_transform(capacity: usize, transform: CoordinateTransform) -> Self {
        Self {
            capacity,
            transform,
            start: None,
            end: None,
            relays: Vec::with_capacity(capacity),
        }
    }

    /// Register a location, deriving its coordinates once.
    ///
    /// `START` and `END` fill the singleton slots, replacing any earlier value.
    /// Every other id is appended to the relay collection.
    pub fn add_location(
        &mut self,
        id: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_km: f64,
    ) -> Result<LocationHandle, RegistryError> {
        if !(latitude_deg.is_finite() && longitude_deg.is_finite() && altitude_km.is_finite()) {
            return Err(RegistryError::NonFiniteValue { id: id.to_string() });
        }
        if altitude_km < 0.0 {
            return Err(RegistryError::NegativeAltitude {
                id: id.to_string(),
                altitude_km,
            });
        }

        let role = match id {
            START_ID => Role::Start,
            END_ID => Role::End,
            _ => Role::Relay,
        };

        if role == Role::Relay {
            if self.relays.iter().any(|relay| relay.id == id) {
                return Err(RegistryError::DuplicateId(id.to_string()));
            }
            if self.relays.len() >= self.capacity {
                return Err(RegistryError::CapacityExceeded {
                    id: id.to_string(),
                    capacity: self.capacity,
                });
            }
        }

        let latlon = LatLon::new(latitude_deg, longitude_deg);
        let location = Location {
            id: id.to_string(),
            latlon,
            coordinates: self.transform.to_cartesian(latlon, altitude_km),
            altitude_km,
            role,
        };

        let handle = match role {
            Role::Start => {
                if self.start.replace(location).is_some() {
                    tracing::warn!("start location redefined; keeping the latest value");
                }
                LocationHandle::Start
            }
            Role::End => {
                if self.end.replace(location).is_some() {
                    tracing::warn!("end location redefined; keeping the latest value");
                }
                LocationHandle::End
            }
            Role::Relay => {
                self.relays.push(location);
                LocationHandle::Relay(self.relays.len() - 1)
            }
        };
        tracing::trace!(id, ?handle, "location registered");
        Ok(handle)
    }

    pub fn start(&self) -> Option<&Location> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Location> {
        self.end.as_ref()
    }

    pub fn satellite_at(&self, index: usize) -> Option<&Location> {
        self.relays.get(index)
    }

    pub fn satellites(&self) -> &[Location] {
        &self.relays
    }

    /// Resolve a handle to its location, if that slot is filled.
    pub fn get(&self, handle: LocationHandle) -> Option<&Location> {
        match handle {
            LocationHandle::Start => self.start(),
            LocationHandle::End => self.end(),
            LocationHandle::Relay(index) => self.satellite_at(index),
        }
    }

    /// Identity-based membership: true when `handle` names a filled slot.
    pub fn contains(&self, handle: LocationHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Maximum number of relays.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of registered relays.
    pub fn len(&self) -> usize {
        self.relays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relays.is_empty()
    }

    pub fn transform(&self) -> CoordinateTransform {
        self.transform
    }
}
