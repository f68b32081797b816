//! Read from and write to [WKT](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry).
//!
//! Only `POINT`, `LINESTRING` and `POLYGON` in two dimensions are supported.
//! There is no SRID prefix and no `Z`/`M` ordinate.

pub use reader::{read_wkt, read_wkt_lenient};
pub use writer::{geometry_to_wkt, write_wkt};

mod reader;
mod writer;
