//! Concrete geographic geometry types.

mod point;

pub use point::GeoPoint2d;
