use geojson::GeoJson;
use tracing::{debug, warn};

use crate::algorithm::Centroid;
use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::geojson::{geometry_to_geojson, layer_to_geometry};
use crate::io::wkt::write_wkt;
use crate::map::{fit_map_to_geometry, FitOutcome, MapConfig, MapView};

/// Where a map view stands with respect to its geometry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SyncState {
    /// No geometry is displayed.
    #[default]
    Empty,
    /// A geometry is displayed. `fitted` is set once the view has been fit to
    /// it and stays set for as long as the same geometry is shown.
    Loaded { geometry: Geometry, fitted: bool },
    /// The user is drawing or editing with the draw tool.
    Editing { geometry: Geometry, fitted: bool },
}

impl SyncState {
    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            SyncState::Empty => None,
            SyncState::Loaded { geometry, .. } | SyncState::Editing { geometry, .. } => {
                Some(geometry)
            }
        }
    }

    pub fn fitted(&self) -> bool {
        match self {
            SyncState::Empty => false,
            SyncState::Loaded { fitted, .. } | SyncState::Editing { fitted, .. } => *fitted,
        }
    }
}

/// A draw-tool interaction, carrying the GeoJSON the widget emitted.
#[derive(Debug, Clone)]
pub enum DrawEvent {
    /// A new layer was drawn.
    Created(GeoJson),
    /// An existing layer was edited.
    Edited(GeoJson),
    /// Layers were deleted. Carries the collection of layers that remain.
    Deleted(GeoJson),
}

impl DrawEvent {
    fn name(&self) -> &'static str {
        match self {
            DrawEvent::Created(_) => "created",
            DrawEvent::Edited(_) => "edited",
            DrawEvent::Deleted(_) => "deleted",
        }
    }

    fn layer(&self) -> &GeoJson {
        match self {
            DrawEvent::Created(layer) | DrawEvent::Edited(layer) | DrawEvent::Deleted(layer) => {
                layer
            }
        }
    }
}

/// The geometry handed back to the owning screen after a draw commit.
///
/// The screen is responsible for persisting it, typically by storing `wkt`
/// in the plot record's `plot_geom` field.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryChange {
    pub geometry: Option<Geometry>,
    pub wkt: Option<String>,
}

/// The view synchronization state machine.
///
/// ```text
/// Empty --load--> Loaded --begin_edit--> Editing --commit--> Loaded
/// ```
///
/// Fitting the view to a geometry's bounds happens at most once per freshly
/// loaded geometry. Loading an equal geometry again re-renders it without
/// moving the view, while loading a different geometry resets the guard.
/// Every draw commit re-centers the view on the new geometry's centroid
/// regardless of the guard.
#[derive(Debug, Clone, Default)]
pub struct MapSync {
    state: SyncState,
    config: MapConfig,
}

impl MapSync {
    pub fn new(config: MapConfig) -> Self {
        Self {
            state: SyncState::Empty,
            config,
        }
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Display `geometry`, fitting the view to it if it has not been fit yet.
    ///
    /// Returns the fit outcome when a fit was attempted, and `None` when the
    /// view was left where it was.
    pub fn load<V: MapView + ?Sized>(
        &mut self,
        view: &mut V,
        geometry: Option<Geometry>,
    ) -> Option<FitOutcome> {
        let geometry = match geometry {
            Some(Geometry::Unknown) => {
                warn!("unsupported geometry, nothing drawn");
                None
            }
            other => other,
        };

        view.clear();
        let Some(geometry) = geometry else {
            debug!("map cleared");
            self.state = SyncState::Empty;
            return None;
        };

        let already_fitted = self.state.geometry() == Some(&geometry) && self.state.fitted();
        view.render(&geometry_to_geojson(&geometry));

        let (fitted, outcome) = if already_fitted {
            debug!("geometry unchanged, keeping current view");
            (true, None)
        } else {
            let outcome = fit_map_to_geometry(view, &geometry, &self.config);
            (outcome.adjusted(), Some(outcome))
        };

        self.state = SyncState::Loaded { geometry, fitted };
        outcome
    }

    /// Enter editing mode. Only possible while a geometry is loaded.
    pub fn begin_edit(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            SyncState::Loaded { geometry, fitted } => {
                self.state = SyncState::Editing { geometry, fitted };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Apply a draw-tool event.
    ///
    /// The emitted layer is converted back to a [`Geometry`] and to WKT, the
    /// view is re-centered on the result, and the state returns to
    /// [`SyncState::Loaded`]. A deletion that leaves no shape returns to
    /// [`SyncState::Empty`].
    ///
    /// A geometry that only ever existed through drawing counts as fitted: the
    /// user is already looking at it.
    ///
    /// # Errors
    ///
    /// Fails if the layer is not a supported geometry. The state is left
    /// unchanged in that case.
    pub fn commit<V: MapView + ?Sized>(
        &mut self,
        view: &mut V,
        event: DrawEvent,
    ) -> Result<GeometryChange> {
        let geometry = layer_to_geometry(event.layer()).map_err(|err| {
            warn!(%err, event = event.name(), "ignoring drawn layer");
            err
        })?;

        let Some(geometry) = geometry else {
            debug!(event = event.name(), "no shape left on map");
            self.state = SyncState::Empty;
            return Ok(GeometryChange {
                geometry: None,
                wkt: None,
            });
        };

        let wkt = write_wkt(&geometry)?;
        if let Some(center) = geometry.centroid() {
            debug!(event = event.name(), ?center, "re-centering on drawn geometry");
            view.pan_to(center);
        }

        let fitted = match &self.state {
            SyncState::Empty => true,
            state => state.fitted(),
        };
        self.state = SyncState::Loaded {
            geometry: geometry.clone(),
            fitted,
        };

        Ok(GeometryChange {
            geometry: Some(geometry),
            wkt: Some(wkt),
        })
    }
}
