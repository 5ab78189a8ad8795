//! Horizon-distance line-of-sight predicate.

use hops_core::constants::EARTH_RADIUS_KM;
use hops_core::vector;

use crate::transform::Coordinates;

/// Anything with a Cartesian position and an altitude above the reference sphere.
pub trait Positioned {
    fn coordinates(&self) -> Coordinates;
    fn altitude_km(&self) -> f64;
}

/// Distance from a point at `altitude_km` to its tangent horizon on the reference sphere.
pub fn distance_to_horizon(altitude_km: f64) -> f64 {
    (2.0 * EARTH_RADIUS_KM * altitude_km + altitude_km * altitude_km).sqrt()
}

/// Euclidean distance between two positions (km).
pub fn distance(a: &Coordinates, b: &Coordinates) -> f64 {
    vector::distance(&a.as_vector(), &b.as_vector())
}

/// Mutual line of sight: the separation must not exceed the sum of both horizon distances.
///
/// Symmetric in its arguments. Two ground points (altitude 0) are only visible to
/// each other when they coincide.
pub fn is_visible<A, B>(a: &A, b: &B) -> bool
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    let separation = distance(&a.coordinates(), &b.coordinates());
    separation <= distance_to_horizon(a.altitude_km()) + distance_to_horizon(b.altitude_km())
}
