use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::GeomarkTypesError;
use crate::geo::traits::point::GeoPoint;

/// 2d point on the surface of the Earth with validated coordinates.
///
/// Latitude is always in `[-90, 90]` and longitude in `[-180, 180]`. The only way to obtain a
/// value is [`GeoPoint2d::new`] (or deserialization, which runs the same checks).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint2d {
    type Error = GeomarkTypesError;

    fn try_from(value: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(value.lat, value.lon)
    }
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl GeoPoint2d {
    /// Creates a new point from latitude and longitude in degrees.
    ///
    /// Fails with [`GeomarkTypesError::InvalidCoordinate`] if latitude is outside `[-90, 90]`,
    /// longitude is outside `[-180, 180]` or any of the values is not finite. Values are never
    /// clamped.
    ///
    /// ```
    /// use geomark_types::geo::GeoPoint;
    /// use geomark_types::geo::impls::GeoPoint2d;
    ///
    /// let point = GeoPoint2d::new(10.762622, 106.660172).unwrap();
    /// assert_eq!(point.lat(), 10.762622);
    /// assert!(GeoPoint2d::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeomarkTypesError> {
        // Range checks are false for NaN, so NaN is rejected too.
        if !((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)) {
            return Err(GeomarkTypesError::InvalidCoordinate { lat, lon });
        }

        Ok(Self { lat, lon })
    }

    /// Creates a new point in const context.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range. In a `const` item this is a compile error.
    pub const fn new_const(lat: f64, lon: f64) -> Self {
        if !(lat >= -90.0 && lat <= 90.0 && lon >= -180.0 && lon <= 180.0) {
            panic!("coordinates are out of range");
        }

        Self { lat, lon }
    }

    /// Creates a point from coordinates that are already known to be in range.
    pub(crate) const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Display for GeoPoint2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Creates a new [`GeoPoint2d`](crate::geo::impls::GeoPoint2d) from latitude and longitude values
/// (in degrees). Evaluates to `Result<GeoPoint2d, GeomarkTypesError>`.
///
/// ```
/// use geomark_types::geo::GeoPoint;
/// use geomark_types::latlon;
///
/// let point = latlon!(38.0, 52.0).unwrap();
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::impls::GeoPoint2d::new($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_values_in_range() {
        for (lat, lon) in [
            (0.0, 0.0),
            (90.0, 180.0),
            (-90.0, -180.0),
            (10.762622, 106.660172),
            (-33.8688, 151.2093),
        ] {
            let point = GeoPoint2d::new(lat, lon).unwrap();
            assert_eq!(point.lat(), lat);
            assert_eq!(point.lon(), lon);
        }
    }

    #[test]
    fn rejects_values_out_of_range() {
        for (lat, lon) in [
            (90.000001, 0.0),
            (-90.5, 0.0),
            (0.0, 180.000001),
            (0.0, -181.0),
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            assert_matches!(
                GeoPoint2d::new(lat, lon),
                Err(GeomarkTypesError::InvalidCoordinate { .. })
            );
        }
    }

    #[test]
    fn error_keeps_given_values() {
        let err = GeoPoint2d::new(120.0, 5.0).unwrap_err();
        assert_eq!(
            err,
            GeomarkTypesError::InvalidCoordinate {
                lat: 120.0,
                lon: 5.0
            }
        );
    }

    #[test]
    fn deserialization_validates() {
        let point: GeoPoint2d = serde_json::from_str(r#"{"lat": 10.0, "lon": 106.0}"#).unwrap();
        assert_eq!(point, GeoPoint2d::new(10.0, 106.0).unwrap());

        let invalid = serde_json::from_str::<GeoPoint2d>(r#"{"lat": 100.0, "lon": 106.0}"#);
        assert!(invalid.is_err());
    }

    #[test]
    fn const_constructor() {
        const POINT: GeoPoint2d = GeoPoint2d::new_const(10.762622, 106.660172);
        assert_eq!(POINT, GeoPoint2d::new(10.762622, 106.660172).unwrap());
    }

    #[test]
    #[should_panic]
    fn const_constructor_panics_at_runtime() {
        let lat = 91.0;
        let _ = GeoPoint2d::new_const(lat, 0.0);
    }

    #[test]
    fn macro_builds_points() {
        let point = crate::latlon!(55.0, 37.0).unwrap();
        assert_eq!(point.lon(), 37.0);
        assert!(crate::latlon!(55.0, 370.0).is_err());
    }
}
