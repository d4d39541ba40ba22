//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomarkTypesError {
    /// Latitude is outside `[-90, 90]` or longitude is outside `[-180, 180]`, or one of them is
    /// not a finite number.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate {
        /// Latitude that was given.
        lat: f64,
        /// Longitude that was given.
        lon: f64,
    },
    /// Distance is negative or not a finite number.
    #[error("invalid distance: {0} m")]
    InvalidDistance(f64),
    /// Southern edge of a rectangle lies north of its northern edge.
    #[error("invalid bounds: south {south} is greater than north {north}")]
    InvalidBounds {
        /// Southern latitude that was given.
        south: f64,
        /// Northern latitude that was given.
        north: f64,
    },
}
