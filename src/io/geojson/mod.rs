//! Read from and write to [GeoJSON](https://geojson.org/) geometry objects.

pub use reader::{geojson_string_to_wkt, geojson_to_geometry, layer_to_geometry, read_drawn_layer};
pub use writer::{geometry_to_geojson, wkt_to_geojson, wkt_to_geojson_string};

mod reader;
mod writer;
