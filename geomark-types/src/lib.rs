//! Geographic value types used by the `geomark` annotation engine.
//!
//! * [`geo::GeoPoint`] trait and its validated implementation [`geo::impls::GeoPoint2d`].
//! * Great-circle distance on the mean sphere of a [`geo::Datum`] (see [`geo::distance`]).
//! * Minimal latitude/longitude rectangles that are aware of the antimeridian (see [`geo::GeoBounds`]).

pub mod error;
pub mod geo;

#[cfg(feature = "geo-types")]
mod geo_types;
