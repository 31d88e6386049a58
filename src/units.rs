//! Angle and distance units, conversion constants, and conversion functions.

use crate::error::{Error, Result};
use std::f64::consts::PI;

pub(crate) const DEG2RAD: f64 = PI / 180.0;
pub(crate) const RAD2DEG: f64 = 180.0 / PI;

// Historical multipliers, kept verbatim for bit-compatible results.
const MI2KM: f64 = 1.6093439999999999;
const KM2MI: f64 = 0.621371192237334;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.01;
/// Mean Earth radius in miles
pub const EARTH_RADIUS_MI: f64 = 3958.762079;

pub(crate) const MAX_LAT: f64 = PI / 2.0;
pub(crate) const MIN_LAT: f64 = -MAX_LAT;
pub(crate) const MAX_LON: f64 = PI;
pub(crate) const MIN_LON: f64 = -MAX_LON;
pub(crate) const FULL_CIRCLE: f64 = 2.0 * PI;

/// Unit of a latitude or longitude value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// Unit of a distance or sphere radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Mean Earth radius in this unit
    pub fn earth_radius(self) -> f64 {
        match self {
            DistanceUnit::Miles => EARTH_RADIUS_MI,
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
        }
    }
}

/// Convert degrees to radians
///
/// Fails with [`Error::InvalidDegreeValue`] if the value is NaN or infinite.
pub fn degrees_to_radians(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidDegreeValue);
    }
    Ok(value * DEG2RAD)
}

/// Convert radians to degrees
///
/// Fails with [`Error::InvalidRadianValue`] if the value is NaN or infinite.
pub fn radians_to_degrees(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidRadianValue);
    }
    Ok(value * RAD2DEG)
}

/// Convert miles to kilometers
///
/// Fails with [`Error::InvalidMileValue`] if the value is NaN or infinite.
pub fn miles_to_kilometers(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidMileValue);
    }
    Ok(value * MI2KM)
}

/// Convert kilometers to miles
///
/// Fails with [`Error::InvalidKilometerValue`] if the value is NaN or infinite.
pub fn kilometers_to_miles(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidKilometerValue);
    }
    Ok(value * KM2MI)
}
