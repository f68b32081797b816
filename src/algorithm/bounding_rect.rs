use geo::{coord, Coord, Rect};

use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;

/// An axis-aligned bounding box accumulated over coordinates.
///
/// A freshly created box is empty: its minimums are `+inf` and its maximums
/// `-inf`, so the first coordinate added defines it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl BoundingRect {
    pub fn new() -> Self {
        BoundingRect {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    pub fn add_coord(&mut self, coord: Coord) {
        if coord.x < self.minx {
            self.minx = coord.x;
        }
        if coord.y < self.miny {
            self.miny = coord.y;
        }
        if coord.x > self.maxx {
            self.maxx = coord.x;
        }
        if coord.y > self.maxy {
            self.maxy = coord.y;
        }
    }

    pub fn add_geometry(&mut self, geometry: &Geometry) {
        geometry.coords().for_each(|coord| self.add_coord(coord));
    }

    /// No coordinate has been added.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx || self.miny > self.maxy
    }

    /// Whether the box can be fit on a map.
    ///
    /// An empty box is invalid, and so is a box collapsed to a single
    /// location. A box that is flat in only one direction, such as that of a
    /// vertical line, is still valid.
    pub fn is_valid(&self) -> bool {
        !self.is_empty() && (self.width() > 0. || self.height() > 0.)
    }

    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }

    pub fn min(&self) -> Coord {
        coord! { x: self.minx, y: self.miny }
    }

    pub fn max(&self) -> Coord {
        coord! { x: self.maxx, y: self.maxy }
    }

    pub fn center(&self) -> Option<Coord> {
        if self.is_empty() {
            return None;
        }
        Some(coord! {
            x: (self.minx + self.maxx) / 2.,
            y: (self.miny + self.maxy) / 2.,
        })
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<BoundingRect> for Rect {
    type Error = GeometryError;

    fn try_from(value: BoundingRect) -> Result<Self> {
        if !value.is_valid() {
            return Err(GeometryError::InvalidBounds);
        }
        Ok(Rect::new(value.min(), value.max()))
    }
}

impl From<BoundingRect> for ([f64; 2], [f64; 2]) {
    fn from(value: BoundingRect) -> Self {
        ([value.minx, value.miny], [value.maxx, value.maxy])
    }
}

/// Computes the total bounds (extent) of the input.
pub trait TotalBounds {
    fn total_bounds(&self) -> BoundingRect;
}

impl TotalBounds for Geometry {
    fn total_bounds(&self) -> BoundingRect {
        let mut bounds = BoundingRect::new();
        bounds.add_geometry(self);
        bounds
    }
}

impl TotalBounds for [Geometry] {
    fn total_bounds(&self) -> BoundingRect {
        let mut bounds = BoundingRect::new();
        for geometry in self {
            bounds.add_geometry(geometry);
        }
        bounds
    }
}
