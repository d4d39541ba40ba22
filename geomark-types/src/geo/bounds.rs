use serde::{Deserialize, Serialize};

use crate::error::GeomarkTypesError;
use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::GeoPoint;

/// Rectangle in latitude/longitude space.
///
/// If the rectangle crosses the antimeridian, the longitude of its south-west corner is greater
/// than the longitude of its north-east corner.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoBounds")]
pub struct GeoBounds {
    south_west: GeoPoint2d,
    north_east: GeoPoint2d,
}

#[derive(Deserialize)]
struct RawGeoBounds {
    south_west: GeoPoint2d,
    north_east: GeoPoint2d,
}

impl TryFrom<RawGeoBounds> for GeoBounds {
    type Error = GeomarkTypesError;

    fn try_from(value: RawGeoBounds) -> Result<Self, Self::Error> {
        let south = value.south_west.lat();
        let north = value.north_east.lat();
        if south > north {
            return Err(GeomarkTypesError::InvalidBounds { south, north });
        }

        Ok(Self {
            south_west: value.south_west,
            north_east: value.north_east,
        })
    }
}

impl GeoBounds {
    /// Zero-area bounds at the given point.
    pub fn from_point(p: &GeoPoint2d) -> Self {
        Self {
            south_west: *p,
            north_east: *p,
        }
    }

    /// Smallest bounds that contain all the given points. Returns `None` if the iterator is empty.
    ///
    /// Latitude span is from the southmost to the northmost point. Longitude is treated as a
    /// circle, and the span is the one that leaves out the largest gap between neighbouring
    /// longitudes, so points on both sides of the antimeridian get a narrow rectangle crossing it
    /// instead of one covering the whole globe.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint2d>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;

        Some(Self::fit(first, points))
    }

    /// Smallest bounds that contain both points.
    pub fn enclosing(a: &GeoPoint2d, b: &GeoPoint2d) -> Self {
        Self::fit(a, std::iter::once(b))
    }

    fn fit<'a>(first: &GeoPoint2d, rest: impl Iterator<Item = &'a GeoPoint2d>) -> Self {
        let mut south = first.lat();
        let mut north = first.lat();
        let mut lons = vec![first.lon()];

        for p in rest {
            if south > p.lat() {
                south = p.lat();
            }
            if north < p.lat() {
                north = p.lat();
            }
            lons.push(p.lon());
        }

        let (west, east) = min_lon_span(&mut lons);

        // Every coordinate here is taken from one of the input points.
        Self {
            south_west: GeoPoint2d::new_unchecked(south, west),
            north_east: GeoPoint2d::new_unchecked(north, east),
        }
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoPoint2d {
        self.south_west
    }

    /// North-east corner.
    pub fn north_east(&self) -> GeoPoint2d {
        self.north_east
    }

    /// Southmost latitude.
    pub fn south(&self) -> f64 {
        self.south_west.lat()
    }

    /// Northmost latitude.
    pub fn north(&self) -> f64 {
        self.north_east.lat()
    }

    /// Western longitude edge.
    pub fn west(&self) -> f64 {
        self.south_west.lon()
    }

    /// Eastern longitude edge.
    pub fn east(&self) -> f64 {
        self.north_east.lon()
    }

    /// Whether the rectangle goes across the 180th meridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.west() > self.east()
    }

    /// Width of the rectangle in degrees of longitude, measured eastwards from the western edge.
    pub fn lon_span(&self) -> f64 {
        if self.crosses_antimeridian() {
            self.east() + 360.0 - self.west()
        } else {
            self.east() - self.west()
        }
    }

    /// Height of the rectangle in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.north() - self.south()
    }

    /// Middle of the rectangle.
    pub fn center(&self) -> GeoPoint2d {
        let lat = (self.south() + self.north()) / 2.0;
        let mut lon = self.west() + self.lon_span() / 2.0;
        if lon > 180.0 {
            lon -= 360.0;
        }

        // Both values lie between valid corner coordinates.
        GeoPoint2d::new_unchecked(lat, lon)
    }

    /// Checks if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        let lat_inside = point.lat() >= self.south() && point.lat() <= self.north();
        let lon = point.lon();
        let lon_inside = if self.crosses_antimeridian() {
            lon >= self.west() || lon <= self.east()
        } else {
            lon >= self.west() && lon <= self.east()
        };

        lat_inside && lon_inside
    }
}

/// Returns `(west, east)` of the narrowest circular interval containing all longitudes.
fn min_lon_span(lons: &mut [f64]) -> (f64, f64) {
    lons.sort_by(f64::total_cmp);

    let first = lons[0];
    let last = lons[lons.len() - 1];

    // Gap that is left out by the plain `[first, last]` interval.
    let mut largest_gap = first + 360.0 - last;
    let mut span = (first, last);

    for pair in lons.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > largest_gap {
            largest_gap = gap;
            span = (pair[1], pair[0]);
        }
    }

    span
}
