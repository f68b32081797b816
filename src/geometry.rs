//! The [`Geometry`] tagged union exchanged between WKT and GeoJSON.
//!
//! Only the three shapes a plot boundary can take are modelled. Anything else
//! read from WKT is kept as [`Geometry::Unknown`] so that callers have to
//! handle it explicitly instead of receiving a loosely-typed value.

use std::fmt;

use geo::{Coord, LineString, Point, Polygon};

/// Geometry type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    Unknown,
}

impl GeometryKind {
    /// Classify a WKT type tag such as `"POLYGON"` or `"Point"`.
    ///
    /// Tags are matched case-insensitively after trimming. Unrecognized tags
    /// map to [`GeometryKind::Unknown`].
    pub fn from_wkt_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("POINT") {
            GeometryKind::Point
        } else if tag.eq_ignore_ascii_case("LINESTRING") {
            GeometryKind::LineString
        } else if tag.eq_ignore_ascii_case("POLYGON") {
            GeometryKind::Polygon
        } else {
            GeometryKind::Unknown
        }
    }

    /// The uppercase WKT tag, or `None` for [`GeometryKind::Unknown`].
    pub fn wkt_tag(&self) -> Option<&'static str> {
        match self {
            GeometryKind::Point => Some("POINT"),
            GeometryKind::LineString => Some("LINESTRING"),
            GeometryKind::Polygon => Some("POLYGON"),
            GeometryKind::Unknown => None,
        }
    }

    /// The GeoJSON `type` member for this kind.
    pub fn geojson_type(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::Unknown => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.geojson_type())
    }
}

/// A plot geometry.
///
/// Coordinates are `x` = longitude, `y` = latitude. Rings are stored exactly as
/// supplied: they are neither closed nor re-wound.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coord),
    LineString(Vec<Coord>),
    /// Rings in order. The first ring is the exterior, the rest are holes.
    Polygon(Vec<Vec<Coord>>),
    /// A geometry type that is not handled. Rendering it is a no-op.
    Unknown,
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::Unknown => GeometryKind::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Geometry::Unknown)
    }

    /// Iterate over every coordinate, rings in order.
    pub fn coords(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        match self {
            Geometry::Point(coord) => Box::new(std::iter::once(*coord)),
            Geometry::LineString(coords) => Box::new(coords.iter().copied()),
            Geometry::Polygon(rings) => Box::new(rings.iter().flatten().copied()),
            Geometry::Unknown => Box::new(std::iter::empty()),
        }
    }

    pub fn num_coords(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(coords) => coords.len(),
            Geometry::Polygon(rings) => rings.iter().map(Vec::len).sum(),
            Geometry::Unknown => 0,
        }
    }

    /// The first coordinate: a point's own coordinate, or the first vertex of
    /// a line or exterior ring.
    pub fn first_coord(&self) -> Option<Coord> {
        self.coords().next()
    }

    /// Convert to a [`geo::Geometry`] for use with `geo` algorithms.
    ///
    /// Note that [`geo::Polygon::new`] closes open rings, so this conversion is
    /// only suitable for measurement and never for writing back out.
    pub fn to_geo(&self) -> Option<geo::Geometry<f64>> {
        match self {
            Geometry::Point(coord) => Some(Point::from(*coord).into()),
            Geometry::LineString(coords) => Some(LineString::new(coords.clone()).into()),
            Geometry::Polygon(rings) => {
                let mut rings = rings.iter().map(|ring| LineString::new(ring.clone()));
                let exterior = rings.next().unwrap_or_else(|| LineString::new(vec![]));
                Some(Polygon::new(exterior, rings.collect()).into())
            }
            Geometry::Unknown => None,
        }
    }
}
