use crate::error::{Error, Result};
use crate::types::BoundingBox;
use crate::units::{self, AngleUnit, DistanceUnit};

/// A validated point on the surface of a sphere
///
/// Coordinates are checked at construction (finite values, latitude within
/// ±90°, longitude within ±180°) and stored in both degree and radian form,
/// so accessors and distance math never reconvert. Immutable after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGeoPoint", into = "RawGeoPoint")
)]
pub struct GeoPoint {
    deg_lat: f64,
    deg_lon: f64,
    rad_lat: f64,
    rad_lon: f64,
}

/// Options for [`GeoPoint::bounding_coordinates`]
///
/// A finite, positive `radius` takes precedence; otherwise `unit` selects
/// the mean Earth radius. `unit` is also the unit the distance argument is
/// measured in.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingOptions {
    /// Explicit sphere radius; non-finite or non-positive values fall back
    /// to the Earth radius for `unit`
    pub radius: Option<f64>,
    /// Unit of the distance argument, and of the default Earth radius
    pub unit: DistanceUnit,
}

impl GeoPoint {
    /// Create a point from a latitude and longitude in the given unit
    ///
    /// The other angular form is derived once and stored. Bounds are checked
    /// on the radian values: latitude must lie within [−π/2, π/2] and
    /// longitude within [−π, π], both inclusive.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidLatitude`] / [`Error::InvalidLongitude`] if the
    ///   value is NaN or infinite (latitude is checked first)
    /// * [`Error::LatitudeOutOfBounds`] / [`Error::LongitudeOutOfBounds`] if
    ///   the value is outside its range (latitude is checked first)
    pub fn new(lat: f64, lon: f64, unit: AngleUnit) -> Result<Self> {
        if !lat.is_finite() {
            return Err(Error::InvalidLatitude);
        }
        if !lon.is_finite() {
            return Err(Error::InvalidLongitude);
        }

        let (deg_lat, deg_lon, rad_lat, rad_lon) = match unit {
            AngleUnit::Degrees => (lat, lon, lat * units::DEG2RAD, lon * units::DEG2RAD),
            AngleUnit::Radians => (lat * units::RAD2DEG, lon * units::RAD2DEG, lat, lon),
        };

        if !(units::MIN_LAT..=units::MAX_LAT).contains(&rad_lat) {
            return Err(Error::LatitudeOutOfBounds);
        }
        if !(units::MIN_LON..=units::MAX_LON).contains(&rad_lon) {
            return Err(Error::LongitudeOutOfBounds);
        }

        Ok(Self {
            deg_lat,
            deg_lon,
            rad_lat,
            rad_lon,
        })
    }

    /// Create a point from a latitude and longitude in degrees
    pub fn from_degrees(lat: f64, lon: f64) -> Result<Self> {
        Self::new(lat, lon, AngleUnit::Degrees)
    }

    /// Create a point from a latitude and longitude in radians
    pub fn from_radians(lat: f64, lon: f64) -> Result<Self> {
        Self::new(lat, lon, AngleUnit::Radians)
    }

    /// Latitude in the requested unit
    pub fn latitude(&self, unit: AngleUnit) -> f64 {
        match unit {
            AngleUnit::Degrees => self.deg_lat,
            AngleUnit::Radians => self.rad_lat,
        }
    }

    /// Longitude in the requested unit
    pub fn longitude(&self, unit: AngleUnit) -> f64 {
        match unit {
            AngleUnit::Degrees => self.deg_lon,
            AngleUnit::Radians => self.rad_lon,
        }
    }

    /// Great-circle distance to another point, by the spherical law of
    /// cosines
    ///
    /// The acos argument is not clamped to [−1, 1]: for coinciding or
    /// antipodal points, floating-point drift can push it slightly outside
    /// the domain and the result is NaN.
    pub fn distance_to(&self, other: &GeoPoint, unit: DistanceUnit) -> f64 {
        let (lat1, lon1) = (self.rad_lat, self.rad_lon);
        let (lat2, lon2) = (other.rad_lat, other.rad_lon);

        (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos()).acos()
            * unit.earth_radius()
    }

    /// Smallest lat/lon rectangle containing all points within `distance`
    /// of this point
    ///
    /// If the bounding circle reaches a pole, the longitude bounds collapse
    /// to the full [−180°, 180°] range and the latitude bounds are clamped
    /// at the poles. A longitude bound that crosses the antimeridian wraps
    /// to the opposite sign.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDistance`] if `distance` is NaN, infinite, or not
    /// positive.
    pub fn bounding_coordinates(&self, distance: f64, opts: BoundingOptions) -> Result<BoundingBox> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(Error::InvalidDistance);
        }
        let radius = match opts.radius {
            Some(radius) if radius.is_finite() && radius > 0.0 => radius,
            _ => opts.unit.earth_radius(),
        };

        // Angular radius of the bounding circle
        let rad_dist = distance / radius;

        let mut min_lat = self.rad_lat - rad_dist;
        let mut max_lat = self.rad_lat + rad_dist;

        let (min_lon, max_lon) = if min_lat > units::MIN_LAT && max_lat < units::MAX_LAT {
            let delta_lon = (rad_dist.sin() / self.rad_lat.cos()).asin();

            let mut min_lon = self.rad_lon - delta_lon;
            if min_lon < units::MIN_LON {
                min_lon += units::FULL_CIRCLE;
            }
            let mut max_lon = self.rad_lon + delta_lon;
            if max_lon > units::MAX_LON {
                max_lon -= units::FULL_CIRCLE;
            }
            (min_lon, max_lon)
        } else {
            // The circle touches a pole: every longitude is inside it
            min_lat = min_lat.max(units::MIN_LAT);
            max_lat = max_lat.min(units::MAX_LAT);
            (units::MIN_LON, units::MAX_LON)
        };

        Ok(BoundingBox::new(
            GeoPoint::from_radians(min_lat, min_lon)?,
            GeoPoint::from_radians(max_lat, max_lon)?,
        ))
    }

    /// Check whether this point lies within the given bounding box
    ///
    /// Bounds are inclusive. See [`BoundingBox::contains`].
    pub fn is_in_bounding_box(&self, bbox: &BoundingBox) -> bool {
        bbox.contains(self)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.deg_lat, self.deg_lon)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = Error;

    fn try_from(raw: RawGeoPoint) -> Result<Self> {
        GeoPoint::from_degrees(raw.latitude, raw.longitude)
    }
}

#[cfg(feature = "serde")]
impl From<GeoPoint> for RawGeoPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            latitude: point.deg_lat,
            longitude: point.deg_lon,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use claims::assert_ok;

    #[test]
    fn test_round_trip() {
        let point = GeoPoint::from_degrees(40.689604, -74.04455).unwrap();
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"latitude":40.689604,"longitude":-74.04455}"#);

        let back: GeoPoint = assert_ok!(serde_json::from_str(&json));
        assert_eq!(back, point);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let result: serde_json::Result<GeoPoint> =
            serde_json::from_str(r#"{"latitude":200.0,"longitude":0.0}"#);
        assert!(result.is_err());
    }
}
