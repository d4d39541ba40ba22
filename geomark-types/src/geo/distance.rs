//! Great-circle distance between geographic points.

use std::fmt::{Display, Formatter};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::GeomarkTypesError;
use crate::geo::traits::point::GeoPoint;

/// Mean radius of the Earth in meters (IUGG value, the mean radius of WGS84).
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// Non-negative distance along the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawDistance")]
pub struct Distance {
    meters: f64,
}

#[derive(Deserialize)]
struct RawDistance {
    meters: f64,
}

impl TryFrom<RawDistance> for Distance {
    type Error = GeomarkTypesError;

    fn try_from(value: RawDistance) -> Result<Self, Self::Error> {
        Self::from_meters(value.meters).ok_or(GeomarkTypesError::InvalidDistance(value.meters))
    }
}

impl Distance {
    /// Zero distance.
    pub const ZERO: Distance = Distance { meters: 0.0 };

    /// Creates a distance value. Negative and non-finite inputs are not valid distances, so `None`
    /// is returned for them.
    pub fn from_meters(meters: f64) -> Option<Self> {
        if meters.is_finite() && meters >= 0.0 {
            Some(Self { meters })
        } else {
            None
        }
    }

    /// Distance in meters.
    pub fn meters(&self) -> f64 {
        self.meters
    }

    /// Distance in kilometers.
    pub fn kilometers(&self) -> f64 {
        self.meters / 1000.0
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} km", self.kilometers())
    }
}

/// Haversine distance between two points on a sphere of [`MEAN_EARTH_RADIUS`].
///
/// The result is symmetric and is zero for coordinate-equal points. Compared to the ellipsoidal
/// geodesic the error stays within about half a percent.
///
/// ```
/// use geomark_types::geo::distance::distance;
/// use geomark_types::latlon;
///
/// let a = latlon!(0.0, 0.0).unwrap();
/// let b = latlon!(1.0, 0.0).unwrap();
/// assert!((distance(&a, &b).kilometers() - 111.2).abs() < 0.1);
/// ```
pub fn distance(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> Distance {
    let meters = haversine(
        a.lat_rad(),
        a.lon_rad(),
        b.lat_rad(),
        b.lon_rad(),
        MEAN_EARTH_RADIUS,
    );

    Distance { meters }
}

/// Haversine formula. All angles are in radians, the result is in units of `radius`.
pub(crate) fn haversine<N: Float>(lat1: N, lon1: N, lat2: N, lon2: N, radius: N) -> N {
    let two = N::one() + N::one();
    let half = N::one() / two;

    let d_lat = (lat2 - lat1) * half;
    let d_lon = (lon2 - lon1) * half;

    let a = d_lat.sin().powi(2) + lat1.cos() * lat2.cos() * d_lon.sin().powi(2);
    // Rounding can push `a` slightly over 1 for near antipodal points.
    let a = a.max(N::zero()).min(N::one());

    two * radius * a.sqrt().atan2((N::one() - a).sqrt())
}
