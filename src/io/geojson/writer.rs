use ::geojson::{Position, Value};
use geo::Coord;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::wkt::read_wkt;

fn position(coord: &Coord) -> Position {
    vec![coord.x, coord.y]
}

fn positions(coords: &[Coord]) -> Vec<Position> {
    coords.iter().map(position).collect()
}

/// Convert a [`Geometry`] to a GeoJSON geometry object.
///
/// [`Geometry::Unknown`] becomes an empty `GeometryCollection`, which map
/// widgets render as nothing.
pub fn geometry_to_geojson(geometry: &Geometry) -> ::geojson::Geometry {
    let value = match geometry {
        Geometry::Point(coord) => Value::Point(position(coord)),
        Geometry::LineString(coords) => Value::LineString(positions(coords)),
        Geometry::Polygon(rings) => {
            Value::Polygon(rings.iter().map(|ring| positions(ring)).collect())
        }
        Geometry::Unknown => Value::GeometryCollection(vec![]),
    };
    ::geojson::Geometry::new(value)
}

/// Parse WKT straight into a GeoJSON geometry object.
pub fn wkt_to_geojson(wkt: &str) -> Result<::geojson::Geometry> {
    Ok(geometry_to_geojson(&read_wkt(wkt)?))
}

/// Parse WKT and serialize it as a GeoJSON string.
pub fn wkt_to_geojson_string(wkt: &str) -> Result<String> {
    Ok(serde_json::to_string(&wkt_to_geojson(wkt)?)?)
}
