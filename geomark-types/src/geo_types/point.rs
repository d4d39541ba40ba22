use geo_types::{point, CoordFloat};

use crate::error::GeomarkTypesError;
use crate::geo::impls::GeoPoint2d;
use crate::geo::GeoPoint;

impl<T: CoordFloat> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl TryFrom<geo_types::Point<f64>> for GeoPoint2d {
    type Error = GeomarkTypesError;

    fn try_from(value: geo_types::Point<f64>) -> Result<Self, Self::Error> {
        GeoPoint2d::new(value.y(), value.x())
    }
}

impl From<GeoPoint2d> for geo_types::Point<f64> {
    fn from(value: GeoPoint2d) -> Self {
        point!(x: value.lon(), y: value.lat())
    }
}
