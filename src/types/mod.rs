mod bounding_box;
mod point;

pub use bounding_box::*;
pub use point::*;
