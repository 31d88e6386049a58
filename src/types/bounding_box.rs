use crate::error::Error;
use crate::types::GeoPoint;
use crate::units::AngleUnit;

/// Rectangular (in lat/lon space) geographic area
///
/// An ordered pair of corners as produced by
/// [`GeoPoint::bounding_coordinates`]: southwest first, northeast second.
///
/// # Limitations
///
/// A box that spans the antimeridian has `southwest.longitude >
/// northeast.longitude`; [`BoundingBox::contains`] does not interpret that
/// wrap and compares longitudes directly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub southwest: GeoPoint,
    pub northeast: GeoPoint,
}

impl BoundingBox {
    pub fn new(southwest: GeoPoint, northeast: GeoPoint) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Corners as an ordered `[southwest, northeast]` pair
    pub fn corners(&self) -> [GeoPoint; 2] {
        [self.southwest, self.northeast]
    }

    /// Check whether a point lies within this box
    ///
    /// Compares in degree space with inclusive bounds on all four edges.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat = point.latitude(AngleUnit::Degrees);
        let lon = point.longitude(AngleUnit::Degrees);

        lat >= self.southwest.latitude(AngleUnit::Degrees)
            && lat <= self.northeast.latitude(AngleUnit::Degrees)
            && lon >= self.southwest.longitude(AngleUnit::Degrees)
            && lon <= self.northeast.longitude(AngleUnit::Degrees)
    }
}

/// Build a box from an ordered `[southwest, northeast]` slice
///
/// Fails with [`Error::InvalidBoundingBox`] unless the slice has exactly
/// two elements.
impl TryFrom<&[GeoPoint]> for BoundingBox {
    type Error = Error;

    fn try_from(points: &[GeoPoint]) -> Result<Self, Error> {
        match points {
            [southwest, northeast] => Ok(Self::new(*southwest, *northeast)),
            _ => Err(Error::InvalidBoundingBox),
        }
    }
}

impl From<BoundingBox> for [GeoPoint; 2] {
    fn from(bbox: BoundingBox) -> Self {
        bbox.corners()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err_eq, assert_ok};

    fn bbox() -> BoundingBox {
        BoundingBox::new(
            GeoPoint::from_degrees(40.50973996113307, -74.28175887602288).unwrap(),
            GeoPoint::from_degrees(40.86946803886694, -73.80734112397712).unwrap(),
        )
    }

    #[test]
    fn test_contains_center() {
        let point = GeoPoint::from_degrees(40.689604, -74.04455).unwrap();
        assert!(bbox().contains(&point));
        assert!(point.is_in_bounding_box(&bbox()));
    }

    #[test]
    fn test_contains_corners() {
        let bbox = bbox();
        // Bounds are inclusive
        assert!(bbox.contains(&bbox.southwest));
        assert!(bbox.contains(&bbox.northeast));
    }

    #[test]
    fn test_does_not_contain_outside_points() {
        let bbox = bbox();

        // North, south, east, and west of the box
        assert!(!bbox.contains(&GeoPoint::from_degrees(41.0, -74.04455).unwrap()));
        assert!(!bbox.contains(&GeoPoint::from_degrees(40.0, -74.04455).unwrap()));
        assert!(!bbox.contains(&GeoPoint::from_degrees(40.689604, -73.5).unwrap()));
        assert!(!bbox.contains(&GeoPoint::from_degrees(40.689604, -74.5).unwrap()));
    }

    #[test]
    fn test_try_from_slice() {
        let corners = bbox().corners();
        let converted = assert_ok!(BoundingBox::try_from(&corners[..]));
        assert_eq!(converted, bbox());
    }

    #[test]
    fn test_try_from_slice_wrong_length() {
        let point = GeoPoint::from_degrees(0.0, 0.0).unwrap();

        assert_err_eq!(
            BoundingBox::try_from(&[] as &[GeoPoint]),
            Error::InvalidBoundingBox
        );
        assert_err_eq!(
            BoundingBox::try_from(&[point][..]),
            Error::InvalidBoundingBox
        );
        assert_err_eq!(
            BoundingBox::try_from(&[point, point, point][..]),
            Error::InvalidBoundingBox
        );
    }

    #[test]
    fn test_corners_order() {
        let bbox = bbox();
        let [southwest, northeast] = bbox.into();
        assert_eq!(southwest, bbox.southwest);
        assert_eq!(northeast, bbox.northeast);
    }
}
