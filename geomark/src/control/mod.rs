//! Interactivity of an annotated map.
//!
//! The host converts its own UI callbacks (map clicks, polyline clicks) into [`MapEvent`]s and
//! gives them to an [`EventProcessor`]. The processor has a list of [`MapEventHandler`]s, which
//! change the [`Session`] based on the events. [`AnnotationController`] is the handler that wires
//! taps and line taps to the session according to its mode.

use geomark_types::geo::impls::GeoPoint2d;

use crate::session::Session;

mod annotation;
mod event_processor;

pub use annotation::AnnotationController;
pub use event_processor::EventProcessor;

/// Map input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// The user tapped the map at the given point.
    PointTapped(GeoPoint2d),
    /// The user tapped the line connecting the origin and the target.
    LineTapped,
}

/// Map event handler.
pub trait MapEventHandler {
    /// Handle the event.
    fn handle(&self, event: &MapEvent, session: &mut Session) -> EventPropagation;
}

impl<T> MapEventHandler for T
where
    T: for<'a> Fn(&'a MapEvent, &'a mut Session) -> EventPropagation,
{
    fn handle(&self, event: &MapEvent, session: &mut Session) -> EventPropagation {
        self(event, session)
    }
}

/// Specifies how the event should be propagated after a handler processed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPropagation {
    /// Give the event to the next handler.
    Propagate,
    /// The event is handled, the next handlers do not get it.
    Stop,
}
