use ::geojson::{GeoJson, Value};
use geo::Coord;

use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;
use crate::io::wkt::write_wkt;

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn coord(position: &[f64]) -> Result<Coord> {
    match *position {
        [x, y] if x.is_finite() && y.is_finite() => Ok(Coord { x, y }),
        [_, _] => Err(GeometryError::Parse(format!(
            "non-finite GeoJSON position {position:?}"
        ))),
        _ => Err(GeometryError::Parse(format!(
            "expected a 2D GeoJSON position, found {} values",
            position.len()
        ))),
    }
}

/// A line or ring. Empty position lists are rejected so that every converted
/// geometry can be written as WKT and read back.
fn coords(positions: &[Vec<f64>]) -> Result<Vec<Coord>> {
    if positions.is_empty() {
        return Err(GeometryError::Parse(
            "empty GeoJSON position list".to_string(),
        ));
    }
    positions.iter().map(|p| coord(p)).collect()
}

/// Convert a GeoJSON geometry object into a [`Geometry`].
///
/// # Errors
///
/// [`GeometryError::UnsupportedGeometry`] for anything other than `Point`,
/// `LineString` and `Polygon`. [`GeometryError::Parse`] for positions that are
/// not exactly two finite numbers, and for empty lines, rings or polygons.
pub fn geojson_to_geometry(geometry: &::geojson::Geometry) -> Result<Geometry> {
    match &geometry.value {
        Value::Point(position) => Ok(Geometry::Point(coord(position)?)),
        Value::LineString(positions) => Ok(Geometry::LineString(coords(positions)?)),
        Value::Polygon(rings) if rings.is_empty() => {
            Err(GeometryError::Parse("polygon without rings".to_string()))
        }
        Value::Polygon(rings) => Ok(Geometry::Polygon(
            rings.iter().map(|ring| coords(ring)).collect::<Result<_>>()?,
        )),
        other => Err(GeometryError::UnsupportedGeometry(
            value_type_name(other).to_string(),
        )),
    }
}

/// Extract the geometry from a layer emitted by a drawing widget.
///
/// Widgets hand back a bare geometry, a `Feature` wrapping one, or (after a
/// delete) a `FeatureCollection` of whatever layers remain. A collection
/// yields the first feature that carries a geometry. `None` means there is no
/// shape left.
pub fn layer_to_geometry(layer: &GeoJson) -> Result<Option<Geometry>> {
    let geometry = match layer {
        GeoJson::Geometry(geometry) => Some(geometry),
        GeoJson::Feature(feature) => feature.geometry.as_ref(),
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .find_map(|feature| feature.geometry.as_ref()),
    };
    geometry.map(geojson_to_geometry).transpose()
}

/// Parse a drawn layer from its JSON text.
pub fn read_drawn_layer(json: &str) -> Result<Option<Geometry>> {
    let layer: GeoJson = json.parse()?;
    layer_to_geometry(&layer)
}

/// Convert drawn-layer JSON to the WKT submitted with a plot record.
pub fn geojson_string_to_wkt(json: &str) -> Result<Option<String>> {
    read_drawn_layer(json)?
        .map(|geometry| write_wkt(&geometry))
        .transpose()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::geometry_to_geojson;
    use crate::io::wkt::read_wkt;
    use crate::test::{linestring, point, polygon};
    use serde_json::json;

    #[test]
    fn supported_geometries_convert_back() {
        for geom in [point::p0(), linestring::ls0(), polygon::with_hole()] {
            let geojson = geometry_to_geojson(&geom);
            assert_eq!(geojson_to_geometry(&geojson).unwrap(), geom);
        }
    }

    #[test]
    fn multi_geometries_are_unsupported() {
        let geojson = ::geojson::Geometry::new(Value::MultiPoint(vec![vec![1., 2.]]));
        assert!(matches!(
            geojson_to_geometry(&geojson),
            Err(GeometryError::UnsupportedGeometry(name)) if name == "MultiPoint"
        ));
    }

    #[test]
    fn three_dimensional_positions_are_rejected() {
        let geojson = ::geojson::Geometry::new(Value::Point(vec![1., 2., 3.]));
        assert!(matches!(
            geojson_to_geometry(&geojson),
            Err(GeometryError::Parse(_))
        ));
    }

    #[test]
    fn empty_lines_and_rings_are_rejected() {
        let exterior = vec![vec![0., 0.], vec![1., 0.], vec![1., 1.], vec![0., 0.]];
        for value in [
            Value::LineString(vec![]),
            Value::Polygon(vec![]),
            Value::Polygon(vec![exterior.clone(), vec![]]),
            Value::Polygon(vec![vec![], exterior]),
        ] {
            let layer = GeoJson::Geometry(::geojson::Geometry::new(value));
            assert!(matches!(
                geojson_string_to_wkt(&layer.to_string()),
                Err(GeometryError::Parse(_))
            ));
        }
    }

    #[test]
    fn drawn_shapes_write_readable_wkt() {
        for geom in [point::p0(), linestring::ls0(), polygon::parcela(), polygon::with_hole()] {
            let layer = GeoJson::Geometry(geometry_to_geojson(&geom));
            let wkt = geojson_string_to_wkt(&layer.to_string()).unwrap().unwrap();
            assert_eq!(read_wkt(&wkt).unwrap(), geom);
        }
    }

    #[test]
    fn feature_from_draw_tool() {
        let layer = json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
            }
        });
        let geom = read_drawn_layer(&layer.to_string()).unwrap().unwrap();
        assert_eq!(geom.num_coords(), 4);
    }

    #[test]
    fn empty_collection_after_delete() {
        let layer = json!({ "type": "FeatureCollection", "features": [] });
        assert_eq!(read_drawn_layer(&layer.to_string()).unwrap(), None);
        assert_eq!(geojson_string_to_wkt(&layer.to_string()).unwrap(), None);
    }

    #[test]
    fn collection_yields_first_remaining_shape() {
        let layer = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": null, "geometry": null },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Point", "coordinates": [-68.12, -31.52] }
                }
            ]
        });
        assert_eq!(
            geojson_string_to_wkt(&layer.to_string()).unwrap().as_deref(),
            Some("POINT (-68.12 -31.52)")
        );
    }

    #[test]
    fn invalid_json_is_error() {
        assert!(read_drawn_layer("{ not json").is_err());
    }
}
