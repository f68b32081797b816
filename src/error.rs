//! Defines [`GeometryError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// Text does not match the expected grammar, or a coordinate is not a finite number.
    #[error("geometry parse error: {0}")]
    Parse(String),

    /// Geometry kind outside Point, LineString and Polygon.
    #[error("unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// The bounding box of a geometry is empty or has zero extent.
    #[error("invalid bounds")]
    InvalidBounds,

    /// A plot record field failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    GeoJson(#[from] geojson::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeometryError>;
