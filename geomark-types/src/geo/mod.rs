//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]), distances
//! between them (see [`distance`]) and rectangles enclosing them (see [`GeoBounds`]).

mod bounds;
mod datum;
pub mod distance;
pub mod impls;
mod traits;

pub use bounds::GeoBounds;
pub use datum::Datum;
pub use distance::Distance;
pub use traits::point::GeoPoint;
