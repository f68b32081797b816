use geo::prelude::GeodesicArea as _GeodesicArea;

use crate::geometry::Geometry;

/// Determine the area of a geometry on an ellipsoidal model of the earth.
///
/// This uses the geodesic measurement methods given by [Karney (2013)].
/// Coordinates are interpreted as WGS84 longitude/latitude.
///
/// [Karney (2013)]:  https://arxiv.org/pdf/1109.4448.pdf
pub trait GeodesicArea {
    /// Unsigned area in square meters.
    ///
    /// Points, lines and unknown geometries have zero area. The result does
    /// not depend on ring winding.
    fn geodesic_area_unsigned(&self) -> f64;
}

impl GeodesicArea for Geometry {
    fn geodesic_area_unsigned(&self) -> f64 {
        match self.to_geo() {
            Some(geo::Geometry::Polygon(polygon)) => polygon.geodesic_area_unsigned(),
            _ => 0.,
        }
    }
}
