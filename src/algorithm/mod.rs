//! Algorithms implemented on [`Geometry`](crate::geometry::Geometry) values.
//!
//! These back the map view policy (bounds and centroid) and the plot area
//! reported with each record.

/// Calculate the bounding rectangle of one or more geometries.
pub mod bounding_rect;
pub use bounding_rect::{BoundingRect, TotalBounds};

/// Calculate the centroid of a geometry.
pub mod centroid;
pub use centroid::Centroid;

/// Calculate the area of a geometry on an ellipsoidal model of the earth.
pub mod geodesic_area;
pub use geodesic_area::GeodesicArea;
