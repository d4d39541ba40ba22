use geomark_types::geo::impls::GeoPoint2d;
use log::{debug, warn};

use crate::config::AnnotationMode;
use crate::control::{EventPropagation, MapEvent, MapEventHandler};
use crate::error::GeomarkError;
use crate::session::Session;

/// Handler that updates the annotation from map input.
///
/// * In [`AnnotationMode::Interactive`] every map tap becomes the new target. Taps made before the
///   current location is known are ignored by the session.
/// * A tap on the connecting line reports the distance if the session has distance reporting
///   enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnnotationController;

impl AnnotationController {
    fn handle_point_tap(&self, point: GeoPoint2d, session: &mut Session) -> EventPropagation {
        match session.config().mode() {
            AnnotationMode::Interactive => {
                debug!("Map tapped at {point}");
                session.set_target(point);
                EventPropagation::Stop
            }
            AnnotationMode::FixedTarget { .. } => EventPropagation::Propagate,
        }
    }

    fn handle_line_tap(&self, session: &mut Session) -> EventPropagation {
        match session.report_distance() {
            Ok(_) => EventPropagation::Stop,
            Err(GeomarkError::DistanceReportingDisabled) => {
                debug!("Line tapped, but distance reporting is disabled");
                EventPropagation::Propagate
            }
            Err(err) => {
                warn!("Cannot report distance: {err}");
                EventPropagation::Stop
            }
        }
    }
}

impl MapEventHandler for AnnotationController {
    fn handle(&self, event: &MapEvent, session: &mut Session) -> EventPropagation {
        match event {
            MapEvent::PointTapped(point) => self.handle_point_tap(*point, session),
            MapEvent::LineTapped => self.handle_line_tap(session),
        }
    }
}
