use std::str::FromStr;

use geo::Coord;
use geo_traits::{CoordTrait, Dimensions, LineStringTrait, PointTrait, PolygonTrait};
use tracing::{debug, warn};

use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, GeometryKind};

/// Parse a WKT string into a [`Geometry`].
///
/// The type tag is everything before the first `(`, trimmed and matched
/// case-insensitively. Whitespace between tokens is free-form, so both
/// `POLYGON ((0 0, 1 0, 1 1, 0 0))` and `polygon((0 0,1 0,1 1,0 0))` parse.
///
/// Unrecognized tags such as `MULTIPOINT` produce [`Geometry::Unknown`]
/// without looking at the body.
///
/// # Errors
///
/// Returns [`GeometryError::Parse`] when there is no `(` (this covers
/// `EMPTY`), when the type tag is empty or carries a `Z`/`M` suffix, when the
/// body does not follow the grammar for the tag, or when a coordinate is not
/// exactly two finite numbers.
///
/// ```
/// use plotgeo::geometry::Geometry;
/// use plotgeo::io::wkt::read_wkt;
///
/// let geom = read_wkt("POINT (-68.12 -31.52)").unwrap();
/// assert_eq!(geom, Geometry::Point(geo::coord! { x: -68.12, y: -31.52 }));
/// ```
pub fn read_wkt(wkt: &str) -> Result<Geometry> {
    let open = wkt
        .find('(')
        .ok_or_else(|| GeometryError::Parse(format!("no '(' in WKT {wkt:?}")))?;

    let mut tag = wkt[..open].split_whitespace();
    let Some(name) = tag.next() else {
        return Err(GeometryError::Parse(format!("missing type in WKT {wkt:?}")));
    };

    let kind = GeometryKind::from_wkt_tag(name);
    if kind == GeometryKind::Unknown {
        debug!(tag = name, "unsupported WKT type, falling back to unknown geometry");
        return Ok(Geometry::Unknown);
    }
    if let Some(dimension) = tag.next() {
        return Err(GeometryError::Parse(format!(
            "{name} {dimension} coordinates are not supported in {wkt:?}"
        )));
    }
    if !wkt.trim_end().ends_with(')') {
        return Err(GeometryError::Parse(format!(
            "trailing characters after geometry in {wkt:?}"
        )));
    }

    let parsed = wkt::Wkt::<f64>::from_str(wkt)
        .map_err(|err| GeometryError::Parse(format!("{err} in {wkt:?}")))?;
    match &parsed {
        wkt::Wkt::Point(point) => {
            let coord = point
                .coord()
                .ok_or_else(|| GeometryError::Parse(format!("empty point in {wkt:?}")))?;
            Ok(Geometry::Point(xy(coord)?))
        }
        wkt::Wkt::LineString(line) => Ok(Geometry::LineString(ring(line)?)),
        wkt::Wkt::Polygon(polygon) => {
            let exterior = polygon
                .exterior()
                .ok_or_else(|| GeometryError::Parse(format!("empty polygon in {wkt:?}")))?;
            let mut rings = vec![ring(exterior)?];
            for interior in polygon.interiors() {
                rings.push(ring(interior)?);
            }
            Ok(Geometry::Polygon(rings))
        }
        _ => Err(GeometryError::UnsupportedGeometry(format!(
            "{kind} tag with a different body in {wkt:?}"
        ))),
    }
}

/// Parse a WKT string, logging and discarding any error.
///
/// This is the entry point for display paths, where a malformed geometry
/// should result in nothing being drawn rather than an error.
pub fn read_wkt_lenient(wkt: &str) -> Option<Geometry> {
    match read_wkt(wkt) {
        Ok(geometry) => Some(geometry),
        Err(err) => {
            warn!(%err, wkt, "discarding malformed WKT");
            None
        }
    }
}

fn xy(coord: impl CoordTrait<T = f64>) -> Result<Coord> {
    if !matches!(coord.dim(), Dimensions::Xy) {
        return Err(GeometryError::Parse(
            "coordinates must have exactly two ordinates".to_string(),
        ));
    }
    let (x, y) = (coord.x(), coord.y());
    if !(x.is_finite() && y.is_finite()) {
        return Err(GeometryError::Parse(format!(
            "non-finite coordinate ({x} {y})"
        )));
    }
    Ok(Coord { x, y })
}

/// Coordinates of a line or ring. Empty sequences are rejected.
fn ring(line: impl LineStringTrait<T = f64>) -> Result<Vec<Coord>> {
    if line.num_coords() == 0 {
        return Err(GeometryError::Parse("empty coordinate list".to_string()));
    }
    line.coords().map(xy).collect()
}
