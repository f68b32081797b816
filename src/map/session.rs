use geo::Coord;
use tracing::debug;

use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::wkt::read_wkt_lenient;
use crate::map::{DrawEvent, FitOutcome, GeometryChange, MapConfig, MapSync, MapView, SyncState};

/// A map view owned by one mounted screen.
///
/// The view is acquired by [`MapSession::open`] and released exactly once,
/// either by [`MapSession::dispose`] or when the session is dropped. It is
/// never shared outside the session.
#[derive(Debug)]
pub struct MapSession<V: MapView> {
    view: V,
    sync: MapSync,
    released: bool,
}

impl<V: MapView> MapSession<V> {
    /// Take ownership of `view` and move it to the configured initial view.
    pub fn open(mut view: V, config: MapConfig) -> Self {
        view.set_view(config.initial_center(), config.initial_zoom());
        Self {
            view,
            sync: MapSync::new(config),
            released: false,
        }
    }

    pub fn state(&self) -> &SyncState {
        self.sync.state()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// See [`MapSync::load`].
    pub fn load(&mut self, geometry: Option<Geometry>) -> Option<FitOutcome> {
        self.sync.load(&mut self.view, geometry)
    }

    /// Load the WKT of a fetched plot record.
    ///
    /// Malformed WKT is logged and shown as an empty map.
    pub fn load_wkt(&mut self, wkt: Option<&str>) -> Option<FitOutcome> {
        let geometry = wkt.and_then(read_wkt_lenient);
        self.load(geometry)
    }

    /// See [`MapSync::begin_edit`].
    pub fn begin_edit(&mut self) -> bool {
        self.sync.begin_edit()
    }

    /// See [`MapSync::commit`].
    pub fn commit(&mut self, event: DrawEvent) -> Result<GeometryChange> {
        self.sync.commit(&mut self.view, event)
    }

    /// Jump to a place picked outside the plot, such as a geocoder result.
    ///
    /// Uses the fallback zoom and leaves the loaded geometry and its fit guard
    /// alone.
    pub fn center_on(&mut self, center: Coord) {
        let zoom = self.sync.config().fallback_zoom();
        debug!(?center, zoom, "centering on search result");
        self.view.set_view(center, zoom);
    }

    /// Release the view now instead of waiting for drop.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.released {
            debug!("releasing map view");
            self.view.release();
            self.released = true;
        }
    }
}

impl<V: MapView> Drop for MapSession<V> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon;
    use crate::test::view::{RecordingView, ViewCall};
    use geo::coord;

    #[test]
    fn open_sets_initial_view() {
        let (view, calls) = RecordingView::new();
        let _session = MapSession::open(view, MapConfig::default());
        assert_eq!(
            calls.take(),
            vec![ViewCall::SetView(coord! { x: -68.49125, y: -31.65394 }, 13)]
        );
    }

    #[test]
    fn center_on_search_result() {
        let (view, calls) = RecordingView::new();
        let mut session = MapSession::open(view, MapConfig::default());
        session.load(Some(polygon::parcela()));
        calls.take();

        let found = coord! { x: -68.53, y: -31.54 };
        session.center_on(found);
        assert_eq!(calls.take(), vec![ViewCall::SetView(found, 15)]);
        assert!(session.state().fitted());

        // The plot is still considered fitted, so reloading it does not jump back.
        assert!(session.load(Some(polygon::parcela())).is_none());
        assert_eq!(calls.fit_count(), 0);
    }

    #[test]
    fn dispose_releases_once() {
        let (view, calls) = RecordingView::new();
        let session = MapSession::open(view, MapConfig::default());
        session.dispose();
        assert_eq!(calls.release_count(), 1);
    }

    #[test]
    fn drop_releases() {
        let (view, calls) = RecordingView::new();
        {
            let mut session = MapSession::open(view, MapConfig::default());
            session.load(Some(polygon::parcela()));
        }
        assert_eq!(calls.release_count(), 1);
    }

    #[test]
    fn load_wkt_from_record() {
        let (view, calls) = RecordingView::new();
        let mut session = MapSession::open(view, MapConfig::default());

        assert!(session.load_wkt(Some(polygon::PARCELA_WKT)).is_some());
        assert_eq!(session.state().geometry(), Some(&polygon::parcela()));
        assert_eq!(calls.fit_count(), 1);

        assert!(session.load_wkt(Some("NOT A VALID WKT")).is_none());
        assert_eq!(session.state(), &SyncState::Empty);

        assert!(session.load_wkt(None).is_none());
        assert_eq!(calls.fit_count(), 1);
    }

    #[test]
    fn edit_round_trip_through_session() {
        let (view, calls) = RecordingView::new();
        let mut session = MapSession::open(view, MapConfig::default());
        session.load_wkt(Some(polygon::PARCELA_WKT));
        assert!(session.begin_edit());

        let layer = geojson::GeoJson::Geometry(crate::io::geojson::geometry_to_geojson(
            &polygon::parcela_moved(),
        ));
        let change = session.commit(DrawEvent::Edited(layer)).unwrap();
        assert_eq!(change.geometry, Some(polygon::parcela_moved()));
        assert_eq!(calls.pan_count(), 1);
        assert_eq!(calls.fit_count(), 1);
    }
}
