use geo::algorithm::centroid::Centroid as GeoCentroid;
use geo::Coord;

use crate::geometry::Geometry;

/// Calculation of the centroid.
///
/// The centroid is the arithmetic mean position of all points in the shape.
/// For a polygon, holes are taken into account. A polygon whose area is zero
/// falls back to the centroid of its outline.
pub trait Centroid {
    /// Returns `None` for an empty or [`Geometry::Unknown`] geometry.
    fn centroid(&self) -> Option<Coord>;
}

impl Centroid for Geometry {
    fn centroid(&self) -> Option<Coord> {
        match self {
            Geometry::Point(coord) => Some(*coord),
            Geometry::Unknown => None,
            _ => self.to_geo()?.centroid().map(|point| point.0),
        }
    }
}
