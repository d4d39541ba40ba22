use serde::{Deserialize, Serialize};

/// Reference ellipsoid of a celestial body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Creates a datum from its semi-major axis (in meters) and inverse flattening.
    pub const fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            inv_flattening,
        }
    }

    /// Equatorial radius in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening `a / (a - b)`.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Polar radius in meters.
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - 1.0 / self.inv_flattening)
    }

    /// Radius of the sphere with the same mean radius as the ellipsoid: `(2a + b) / 3`.
    ///
    /// For [`Datum::WGS84`] this is approximately 6,371,008.77 m.
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semimajor + self.semiminor()) / 3.0
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn wgs84_radii() {
        assert_abs_diff_eq!(Datum::WGS84.semiminor(), 6_356_752.314, epsilon = 1e-3);
        assert_abs_diff_eq!(Datum::WGS84.mean_radius(), 6_371_008.8, epsilon = 0.05);
    }

    #[test]
    fn sphere() {
        let sphere = Datum::new(1000.0, f64::INFINITY);
        assert_eq!(sphere.semiminor(), 1000.0);
        assert_eq!(sphere.mean_radius(), 1000.0);
    }
}
