//! Error types used by the crate.

use geomark_types::error::GeomarkTypesError;
use thiserror::Error;

/// Geomark error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomarkError {
    /// Coordinates are out of range.
    #[error(transparent)]
    InvalidCoordinate(#[from] GeomarkTypesError),
    /// Bounds were requested for an empty set of points.
    #[error("cannot fit bounds to an empty set of points")]
    EmptyInput,
    /// Distance was requested before both origin and target are known.
    #[error("no target point is set yet")]
    NotAnnotated,
    /// Distance reporting is not enabled for the current mode.
    #[error("distance reporting is disabled in this mode")]
    DistanceReportingDisabled,
    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GeomarkError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}
