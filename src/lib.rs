//! A bridge between the WKT boundaries stored with vineyard plot records and
//! the GeoJSON consumed by map widgets, plus the policy that keeps a map view
//! in sync with the plot being shown or edited.
//!
//! ```
//! use plotgeo::io::geojson::geometry_to_geojson;
//! use plotgeo::io::wkt::{read_wkt, write_wkt};
//!
//! let wkt = "POLYGON ((-68.122 -31.52, -68.12 -31.5185, -68.119 -31.521, -68.122 -31.52))";
//! let geometry = read_wkt(wkt).unwrap();
//! let geojson = geometry_to_geojson(&geometry);
//! assert!(matches!(geojson.value, geojson::Value::Polygon(_)));
//! assert!(write_wkt(&geometry).unwrap().starts_with("POLYGON (("));
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod error;
pub mod geometry;
pub mod io;
pub mod map;
pub mod record;
#[cfg(test)]
pub(crate) mod test;

pub use error::{GeometryError, Result};
pub use geometry::{Geometry, GeometryKind};
