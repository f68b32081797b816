//! Keep a map view's displayed bounds in sync with the active plot geometry.
//!
//! The map widget itself is external and is driven through the [`MapView`]
//! trait. [`MapSession`] owns one view for the lifetime of a mounted screen and
//! routes geometry loads and draw-tool events through [`MapSync`].

use geo::{Coord, Rect};
use tracing::{debug, warn};

use crate::algorithm::TotalBounds;
use crate::geometry::Geometry;

mod config;
mod session;
mod sync;

pub use config::MapConfig;
pub use session::MapSession;
pub use sync::{DrawEvent, GeometryChange, MapSync, SyncState};

/// The operations this crate needs from a map-rendering widget.
///
/// Coordinates are `x` = longitude, `y` = latitude.
pub trait MapView {
    /// Center the view and set the zoom level.
    fn set_view(&mut self, center: Coord, zoom: u8);

    /// Center the view without changing zoom.
    fn pan_to(&mut self, center: Coord);

    /// Adjust center and zoom so that `bounds` is fully visible.
    fn fit_bounds(&mut self, bounds: Rect);

    /// Add a geometry to the drawn feature group.
    fn render(&mut self, geometry: &geojson::Geometry);

    /// Remove every drawn feature.
    fn clear(&mut self);

    /// Destroy the underlying map and unregister its event listeners.
    fn release(&mut self);
}

/// What [`fit_map_to_geometry`] did to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome {
    /// The view was fit to these bounds.
    Fitted(Rect),
    /// The bounds were degenerate, so the view was centered on the first
    /// coordinate at the fallback zoom.
    Centered(Coord),
    /// Nothing to show.
    Skipped,
}

impl FitOutcome {
    /// Whether the view was moved.
    pub fn adjusted(&self) -> bool {
        !matches!(self, FitOutcome::Skipped)
    }
}

/// Fit the view to the bounding box of `geometry`.
///
/// If the bounding box cannot be fit, for example because the geometry is a
/// single point, the view is centered on the geometry's first coordinate at
/// [`MapConfig::fallback_zoom`] instead. Unknown and empty geometries leave
/// the view untouched.
pub fn fit_map_to_geometry<V: MapView + ?Sized>(
    map: &mut V,
    geometry: &Geometry,
    config: &MapConfig,
) -> FitOutcome {
    if geometry.is_unknown() {
        warn!("not fitting map to an unknown geometry");
        return FitOutcome::Skipped;
    }

    match Rect::try_from(geometry.total_bounds()) {
        Ok(bounds) => {
            debug!(?bounds, "fitting map to geometry bounds");
            map.fit_bounds(bounds);
            FitOutcome::Fitted(bounds)
        }
        Err(err) => match geometry.first_coord() {
            Some(center) => {
                debug!(%err, ?center, "centering map on first coordinate");
                map.set_view(center, config.fallback_zoom());
                FitOutcome::Centered(center)
            }
            None => {
                debug!(kind = %geometry.kind(), "geometry has no coordinates to show");
                FitOutcome::Skipped
            }
        },
    }
}
