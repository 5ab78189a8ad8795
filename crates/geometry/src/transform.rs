//! Geodetic (latitude, longitude, altitude) to Earth-centred Cartesian conversion.

use hops_core::constants::EARTH_RADIUS_KM;
use hops_core::units::deg_to_rad;
use hops_core::vector::{self, Vector3};

/// Geodetic latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl LatLon {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// Earth-centred Cartesian position in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl Coordinates {
    pub fn new(x_km: f64, y_km: f64, z_km: f64) -> Self {
        Self { x_km, y_km, z_km }
    }

    pub fn as_vector(&self) -> Vector3 {
        [self.x_km, self.y_km, self.z_km]
    }

    /// Distance from the Earth's centre.
    pub fn radius_km(&self) -> f64 {
        vector::norm(&self.as_vector())
    }
}

impl From<Vector3> for Coordinates {
    fn from(v: Vector3) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// How a location's altitude enters its Cartesian position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AltitudeModel {
    /// Every location sits on the reference sphere; altitude only feeds the
    /// horizon distance. Matches the historical routing results.
    #[default]
    Surface,
    /// Locations sit at `EARTH_RADIUS_KM + altitude` from the centre.
    Raised,
}

/// Converts geodetic positions to Cartesian coordinates on a spherical Earth.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateTransform {
    pub altitude_model: AltitudeModel,
}

impl CoordinateTransform {
    pub fn new(altitude_model: AltitudeModel) -> Self {
        Self { altitude_model }
    }

    /// Radius used to place a location with the given altitude.
    pub fn radius_for(&self, altitude_km: f64) -> f64 {
        match self.altitude_model {
            AltitudeModel::Surface => EARTH_RADIUS_KM,
            AltitudeModel::Raised => EARTH_RADIUS_KM + altitude_km,
        }
    }

    /// Convert a geodetic position (degrees, km) to Earth-centred coordinates.
    pub fn to_cartesian(&self, latlon: LatLon, altitude_km: f64) -> Coordinates {
        let lat = deg_to_rad(latlon.latitude_deg);
        let lon = deg_to_rad(latlon.longitude_deg);
        let unit = [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()];
        vector::scale(&unit, self.radius_for(altitude_km)).into()
    }
}

/// Surface-model conversion; altitude does not move the point off the sphere.
pub fn geodetic_to_cartesian(latlon: LatLon, altitude_km: f64) -> Coordinates {
    CoordinateTransform::default().to_cartesian(latlon, altitude_km)
}
