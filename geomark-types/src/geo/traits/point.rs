use num_traits::{Float, NumCast};

use crate::geo::datum::Datum;
use crate::geo::distance::haversine;

/// A point on the surface of a celestial body given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great-circle distance in meters to the `other` point, measured on the mean sphere of the
    /// `datum`.
    ///
    /// Returns `None` if the radius of the datum cannot be represented by `Self::Num`.
    fn distance(&self, other: &impl GeoPoint<Num = Self::Num>, datum: &Datum) -> Option<Self::Num> {
        let radius: Self::Num = NumCast::from(datum.mean_radius())?;
        Some(haversine(
            self.lat_rad(),
            self.lon_rad(),
            other.lat_rad(),
            other.lon_rad(),
            radius,
        ))
    }
}
