#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::types::*;
pub use crate::units::{AngleUnit, DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use crate::units::{degrees_to_radians, kilometers_to_miles, miles_to_kilometers, radians_to_degrees};

mod error;
mod types;
pub mod units;
