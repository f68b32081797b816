//! Readers and writers for the text formats a plot geometry crosses: WKT on
//! the REST side and GeoJSON on the map side.

pub mod geojson;
pub mod wkt;
