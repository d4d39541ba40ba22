use std::sync::Arc;

use geomark_types::geo::Distance;
use parking_lot::Mutex;

use crate::location::LocationError;

/// Shows results of the annotation engine to the user (toasts, status bars, dialogs).
pub trait Presenter {
    /// Shows the distance between the origin and the target.
    fn show_distance(&self, distance: Distance);
    /// Tells the user the current location could not be acquired.
    fn show_location_error(&self, error: &LocationError);
}

/// Presenter that writes everything to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn show_distance(&self, distance: Distance) {
        log::info!("Distance: {distance}");
    }

    fn show_location_error(&self, error: &LocationError) {
        log::warn!("Location is not available: {error}");
    }
}

/// Something a [`Presenter`] was asked to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Presented {
    /// A distance report.
    Distance(Distance),
    /// A location acquisition failure.
    LocationError(LocationError),
}

/// Presenter that keeps everything it was asked to show. Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    shown: Arc<Mutex<Vec<Presented>>>,
}

impl RecordingPresenter {
    /// Creates an empty presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything shown so far.
    pub fn shown(&self) -> Vec<Presented> {
        self.shown.lock().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn show_distance(&self, distance: Distance) {
        self.shown.lock().push(Presented::Distance(distance));
    }

    fn show_location_error(&self, error: &LocationError) {
        self.shown.lock().push(Presented::LocationError(error.clone()));
    }
}
