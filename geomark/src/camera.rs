//! Camera framing: the smallest geographic rectangle that shows a set of points.

use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::GeoBounds;
use serde::{Deserialize, Serialize};

use crate::error::GeomarkError;

/// Region the camera should show, with padding in screen pixels around it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    bounds: GeoBounds,
    padding_px: u32,
}

impl BoundingRegion {
    /// Creates a region from the given bounds.
    pub fn new(bounds: GeoBounds, padding_px: u32) -> Self {
        Self { bounds, padding_px }
    }

    /// Region enclosing two points.
    pub fn enclosing(a: &GeoPoint2d, b: &GeoPoint2d, padding_px: u32) -> Self {
        Self::new(GeoBounds::enclosing(a, b), padding_px)
    }

    /// Geographic rectangle of the region.
    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoPoint2d {
        self.bounds.south_west()
    }

    /// North-east corner. Its longitude is smaller than the south-west one if the region crosses
    /// the antimeridian.
    pub fn north_east(&self) -> GeoPoint2d {
        self.bounds.north_east()
    }

    /// Padding in pixels to leave between the region and the edges of the screen. It is a hint for
    /// the renderer and does not change the geographic rectangle.
    pub fn padding_px(&self) -> u32 {
        self.padding_px
    }
}

/// Computes the region that contains all `points`.
///
/// One point gives a zero-area region at that point. `padding_px` is passed through unchanged.
///
/// ```
/// use geomark::camera::fit;
/// use geomark::geomark_types::latlon;
///
/// let a = latlon!(10.0, 106.0).unwrap();
/// let b = latlon!(10.762622, 106.660172).unwrap();
/// let region = fit(&[a, b], 300).unwrap();
/// assert_eq!(region.south_west(), a);
/// assert!(fit(&[], 300).is_err());
/// ```
pub fn fit(points: &[GeoPoint2d], padding_px: u32) -> Result<BoundingRegion, GeomarkError> {
    let bounds = GeoBounds::from_points(points).ok_or(GeomarkError::EmptyInput)?;
    Ok(BoundingRegion::new(bounds, padding_px))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geomark_types::geo::GeoPoint;
    use geomark_types::latlon;

    use super::*;

    #[test]
    fn empty_input() {
        assert_matches!(fit(&[], 300), Err(GeomarkError::EmptyInput));
    }

    #[test]
    fn single_point() {
        let p = latlon!(10.0, 106.0).unwrap();
        let region = fit(&[p], 300).unwrap();

        assert_eq!(region.south_west(), p);
        assert_eq!(region.north_east(), p);
        assert_eq!(region.padding_px(), 300);
    }

    #[test]
    fn two_points_keep_padding() {
        let origin = latlon!(10.0, 106.0).unwrap();
        let target = latlon!(10.762622, 106.660172).unwrap();
        let region = fit(&[origin, target], 300).unwrap();

        assert_eq!(region.south_west(), origin);
        assert_eq!(region.north_east(), target);
        assert_eq!(region.padding_px(), 300);
        assert!(region.bounds().contains(&origin));
        assert!(region.bounds().contains(&target));

        assert_eq!(region, BoundingRegion::enclosing(&target, &origin, 300));
        assert_eq!(fit(&[origin, target], 0).unwrap().bounds(), region.bounds());
    }

    #[test]
    fn deserialization_validates_bounds() {
        let region = BoundingRegion::enclosing(
            &latlon!(10.0, 106.0).unwrap(),
            &latlon!(10.762622, 106.660172).unwrap(),
            300,
        );
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(serde_json::from_str::<BoundingRegion>(&json).unwrap(), region);

        let flipped = r#"{
            "bounds": {
                "south_west": {"lat": 11.0, "lon": 106.0},
                "north_east": {"lat": 10.0, "lon": 107.0}
            },
            "padding_px": 300
        }"#;
        assert!(serde_json::from_str::<BoundingRegion>(flipped).is_err());
    }

    #[test]
    fn antimeridian() {
        let a = latlon!(-16.5, 179.0).unwrap();
        let b = latlon!(-18.1, -178.4).unwrap();
        let region = fit(&[a, b], 300).unwrap();

        assert!(region.bounds().crosses_antimeridian());
        assert_eq!(region.south_west().lon(), 179.0);
        assert_eq!(region.north_east().lon(), -178.4);
        assert!(region.bounds().lon_span() < 3.0);
    }
}
