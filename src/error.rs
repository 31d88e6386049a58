/// Invalid-input errors raised by validation
///
/// Each variant maps to exactly one invalid-input condition, so callers can
/// match on the specific failure rather than inspecting a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid latitude")]
    InvalidLatitude,

    #[error("Invalid longitude")]
    InvalidLongitude,

    #[error("Latitude out of bounds")]
    LatitudeOutOfBounds,

    #[error("Longitude out of bounds")]
    LongitudeOutOfBounds,

    /// A point failed validation
    ///
    /// Not produced by the safe API: every [`GeoPoint`](crate::GeoPoint) is
    /// validated at construction. Kept so the full set of invalid-input
    /// conditions stays distinguishable.
    #[error("Invalid GeoPoint")]
    InvalidPoint,

    #[error("Invalid distance")]
    InvalidDistance,

    #[error("Invalid bounding box")]
    InvalidBoundingBox,

    #[error("Invalid degree value")]
    InvalidDegreeValue,

    #[error("Invalid radian value")]
    InvalidRadianValue,

    #[error("Invalid mile value")]
    InvalidMileValue,

    #[error("Invalid kilometer value")]
    InvalidKilometerValue,
}

pub type Result<T> = std::result::Result<T, Error>;
