use geo::coord;

use crate::geometry::Geometry;

pub(crate) const LS0_WKT: &str = "LINESTRING (0 1, 1 2, 3 5)";

pub(crate) fn ls0() -> Geometry {
    Geometry::LineString(vec![
        coord! { x: 0., y: 1. },
        coord! { x: 1., y: 2. },
        coord! { x: 3., y: 5. },
    ])
}

/// A vertical line, which has zero width but a usable extent.
pub(crate) fn ls_vertical() -> Geometry {
    Geometry::LineString(vec![coord! { x: 2., y: 0. }, coord! { x: 2., y: 4. }])
}
