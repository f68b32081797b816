use std::cell::RefCell;
use std::rc::Rc;

use geo::{Coord, Rect};

use crate::map::MapView;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewCall {
    SetView(Coord, u8),
    PanTo(Coord),
    FitBounds(Rect),
    Render(geojson::Geometry),
    Clear,
    Release,
}

/// Shared handle onto the calls a [`RecordingView`] received. Outlives the
/// view, so teardown can be checked after a session is dropped.
#[derive(Debug, Clone, Default)]
pub(crate) struct Calls(Rc<RefCell<Vec<ViewCall>>>);

impl Calls {
    pub(crate) fn take(&self) -> Vec<ViewCall> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    fn count(&self, pred: impl Fn(&ViewCall) -> bool) -> usize {
        self.0.borrow().iter().filter(|call| pred(call)).count()
    }

    pub(crate) fn fit_count(&self) -> usize {
        self.count(|call| matches!(call, ViewCall::FitBounds(_)))
    }

    pub(crate) fn pan_count(&self) -> usize {
        self.count(|call| matches!(call, ViewCall::PanTo(_)))
    }

    pub(crate) fn render_count(&self) -> usize {
        self.count(|call| matches!(call, ViewCall::Render(_)))
    }

    pub(crate) fn release_count(&self) -> usize {
        self.count(|call| matches!(call, ViewCall::Release))
    }
}

/// A [`MapView`] that records every call it receives.
#[derive(Debug)]
pub(crate) struct RecordingView {
    calls: Calls,
}

impl RecordingView {
    pub(crate) fn new() -> (Self, Calls) {
        let calls = Calls::default();
        (
            Self {
                calls: calls.clone(),
            },
            calls,
        )
    }

    fn push(&mut self, call: ViewCall) {
        self.calls.0.borrow_mut().push(call);
    }
}

impl MapView for RecordingView {
    fn set_view(&mut self, center: Coord, zoom: u8) {
        self.push(ViewCall::SetView(center, zoom));
    }

    fn pan_to(&mut self, center: Coord) {
        self.push(ViewCall::PanTo(center));
    }

    fn fit_bounds(&mut self, bounds: Rect) {
        self.push(ViewCall::FitBounds(bounds));
    }

    fn render(&mut self, geometry: &geojson::Geometry) {
        self.push(ViewCall::Render(geometry.clone()));
    }

    fn clear(&mut self) {
        self.push(ViewCall::Clear);
    }

    fn release(&mut self) {
        self.push(ViewCall::Release);
    }
}
