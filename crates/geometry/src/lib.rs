//! Spherical-Earth geometry: geodetic to Cartesian transforms and horizon-based line of sight.

pub mod transform;
pub mod visibility;

pub use transform::{
    AltitudeModel, CoordinateTransform, Coordinates, LatLon, geodetic_to_cartesian,
};
pub use visibility::{Positioned, distance, distance_to_horizon, is_visible};
