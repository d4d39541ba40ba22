use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::Distance;
use log::{debug, info, warn};

use crate::annotation::{AnnotationState, Annotator};
use crate::command::RenderCommand;
use crate::config::{AnnotationConfig, AnnotationMode};
use crate::error::GeomarkError;
use crate::location::LocationError;
use crate::presenter::Presenter;
use crate::render::MapRenderer;

mod builder;

pub use builder::SessionBuilder;

/// One annotation session: the annotation state together with the map renderer and the
/// presenter it reports to.
///
/// A session has a single owner. Location results and map events must be delivered to it one at
/// a time through `&mut` access (for example from a single event queue).
pub struct Session {
    annotator: Annotator,
    renderer: Box<dyn MapRenderer>,
    presenter: Box<dyn Presenter>,
}

impl Session {
    /// Creates a new session in the [`AnnotationState::Empty`] state.
    pub fn new(
        config: AnnotationConfig,
        renderer: Box<dyn MapRenderer>,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self {
            annotator: Annotator::new(config),
            renderer,
            presenter,
        }
    }

    /// Current annotation state.
    pub fn state(&self) -> &AnnotationState {
        self.annotator.state()
    }

    /// Session configuration.
    pub fn config(&self) -> &AnnotationConfig {
        self.annotator.config()
    }

    /// Sets the current location and renders it.
    ///
    /// In [`AnnotationMode::FixedTarget`] the configured target is set right after the first
    /// origin, so the whole annotation appears at once.
    pub fn set_origin(&mut self, origin: GeoPoint2d) {
        info!("Current location: {origin}");
        let commands = self.annotator.set_origin(origin);
        self.dispatch(commands);

        let mode = self.config().mode();
        if let AnnotationMode::FixedTarget { target } = mode {
            if !self.state().is_annotated() {
                let commands = self.annotator.set_target(target);
                self.dispatch(commands);
            }
        }
    }

    /// Sets the target point and renders the annotation. Ignored if the origin is not known yet.
    pub fn set_target(&mut self, target: GeoPoint2d) {
        let commands = self.annotator.set_target(target);
        self.dispatch(commands);
    }

    /// Distance between origin and target.
    pub fn request_distance(&self) -> Result<Distance, GeomarkError> {
        self.annotator.request_distance()
    }

    /// Whether distance reports are enabled for this session.
    pub fn distance_reporting(&self) -> bool {
        self.config().distance_reporting()
    }

    /// Computes the distance between origin and target and shows it through the presenter.
    ///
    /// Fails if distance reporting is disabled for the session or the annotation is not complete.
    pub fn report_distance(&mut self) -> Result<Distance, GeomarkError> {
        if !self.distance_reporting() {
            return Err(GeomarkError::DistanceReportingDisabled);
        }

        let distance = self.request_distance()?;
        debug!("Reporting distance {distance}");
        self.presenter.show_distance(distance);

        Ok(distance)
    }

    /// Shows the location acquisition error through the presenter. The annotation state is not
    /// changed.
    pub fn report_location_error(&self, error: &LocationError) {
        warn!("Failed to acquire current location: {error}");
        self.presenter.show_location_error(error);
    }

    fn dispatch(&mut self, commands: Vec<RenderCommand>) {
        for command in commands {
            debug!("Rendering {}", command.name());
            self.renderer.render(&command);
        }
    }
}
