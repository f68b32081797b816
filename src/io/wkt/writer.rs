use std::fmt::Write;

use geo::Coord;

use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;

/// Convert a [`Geometry`] to its WKT representation.
///
/// Coordinates are written in the order given. Rings are not closed and
/// winding order is not changed.
///
/// # Errors
///
/// Returns [`GeometryError::UnsupportedGeometry`] for [`Geometry::Unknown`]
/// and for shapes with an empty line or ring, which [`read_wkt`] could not
/// read back.
///
/// [`read_wkt`]: crate::io::wkt::read_wkt
pub fn write_wkt(geometry: &Geometry) -> Result<String> {
    let mut out = String::new();
    geometry_to_wkt(geometry, &mut out)?;
    Ok(out)
}

/// Write a [`Geometry`] as WKT into any [`Write`] sink.
pub fn geometry_to_wkt<W: Write>(geometry: &Geometry, writer: &mut W) -> Result<()> {
    match geometry {
        Geometry::Point(coord) => point_to_wkt(coord, writer)?,
        Geometry::LineString(coords) => linestring_to_wkt(coords, writer)?,
        Geometry::Polygon(rings) => polygon_to_wkt(rings, writer)?,
        Geometry::Unknown => {
            return Err(GeometryError::UnsupportedGeometry(
                "cannot write an unknown geometry as WKT".to_string(),
            ))
        }
    }
    Ok(())
}

fn empty(kind: &str) -> GeometryError {
    GeometryError::UnsupportedGeometry(format!("cannot write an empty {kind} as WKT"))
}

fn point_to_wkt<W: Write>(coord: &Coord, writer: &mut W) -> std::fmt::Result {
    writer.write_str("POINT (")?;
    add_coord(writer, coord)?;
    writer.write_str(")")
}

fn linestring_to_wkt<W: Write>(coords: &[Coord], writer: &mut W) -> Result<()> {
    if coords.is_empty() {
        return Err(empty("LINESTRING"));
    }
    writer.write_str("LINESTRING ")?;
    add_coords(writer, coords)?;
    Ok(())
}

fn polygon_to_wkt<W: Write>(rings: &[Vec<Coord>], writer: &mut W) -> Result<()> {
    if rings.is_empty() {
        return Err(empty("POLYGON"));
    }
    if rings.iter().any(|ring| ring.is_empty()) {
        return Err(empty("POLYGON ring"));
    }

    writer.write_str("POLYGON (")?;
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        add_coords(writer, ring)?;
    }
    writer.write_str(")")?;
    Ok(())
}

fn add_coord<W: Write>(writer: &mut W, coord: &Coord) -> std::fmt::Result {
    let mut buffer = ryu::Buffer::new();
    writer.write_str(buffer.format(coord.x))?;
    writer.write_str(" ")?;
    writer.write_str(buffer.format(coord.y))
}

/// `(x y, x y, ...)`
fn add_coords<W: Write>(writer: &mut W, coords: &[Coord]) -> std::fmt::Result {
    writer.write_str("(")?;
    let mut coords = coords.iter();
    if let Some(first) = coords.next() {
        add_coord(writer, first)?;
    }
    for coord in coords {
        writer.write_str(", ")?;
        add_coord(writer, coord)?;
    }
    writer.write_str(")")
}
