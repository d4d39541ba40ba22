use geomark_types::geo::impls::GeoPoint2d;

use super::Session;
use crate::config::{AnnotationConfig, AnnotationMode};
use crate::presenter::{LogPresenter, Presenter};
use crate::render::{LogRenderer, MapRenderer};

/// Convenience type to initialize a [`Session`].
///
/// ```
/// use geomark::{RecordingRenderer, SessionBuilder};
/// use geomark::geomark_types::latlon;
///
/// let renderer = RecordingRenderer::new();
/// let mut session = SessionBuilder::default()
///     .with_fixed_target(latlon!(10.762622, 106.660172).unwrap())
///     .with_renderer(renderer.clone())
///     .build();
///
/// session.set_origin(latlon!(10.0, 106.0).unwrap());
/// assert_eq!(renderer.commands().len(), 5);
/// ```
#[derive(Default)]
pub struct SessionBuilder {
    config: AnnotationConfig,
    renderer: Option<Box<dyn MapRenderer>>,
    presenter: Option<Box<dyn Presenter>>,
}

impl SessionBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    ///
    /// Values set by other `with_*` methods before this call are overwritten.
    pub fn with_config(mut self, config: AnnotationConfig) -> Self {
        self.config = config;
        self
    }

    /// Annotates against a constant point of interest.
    pub fn with_fixed_target(mut self, target: GeoPoint2d) -> Self {
        self.config.set_mode(AnnotationMode::FixedTarget { target });
        self
    }

    /// Annotates against the points the user taps.
    pub fn interactive(mut self) -> Self {
        self.config.set_mode(AnnotationMode::Interactive);
        self
    }

    /// Enables or disables distance reports on line taps.
    ///
    /// Defaults to the mode default (see [`AnnotationConfig::distance_reporting`]).
    pub fn with_distance_reporting(mut self, enabled: bool) -> Self {
        self.config.set_distance_reporting(enabled);
        self
    }

    /// Sets the renderer the session draws with.
    ///
    /// Defaults to [`LogRenderer`], which keeps nothing.
    pub fn with_renderer(mut self, renderer: impl MapRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Sets the presenter the session reports to.
    ///
    /// Defaults to [`LogPresenter`].
    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Some(Box::new(presenter));
        self
    }

    /// Consumes the builder and creates a session.
    pub fn build(self) -> Session {
        let renderer: Box<dyn MapRenderer> = match self.renderer {
            Some(renderer) => renderer,
            None => Box::new(LogRenderer),
        };
        let presenter: Box<dyn Presenter> = match self.presenter {
            Some(presenter) => presenter,
            None => Box::new(LogPresenter),
        };

        Session::new(self.config, renderer, presenter)
    }
}

#[cfg(test)]
mod tests {
    use geomark_types::latlon;

    use super::*;
    use crate::annotation::AnnotationState;

    #[test]
    fn default_build_renders_to_log() {
        let mut session = SessionBuilder::new().build();

        session.set_origin(latlon!(10.0, 106.0).unwrap());
        session.set_origin(latlon!(10.1, 106.1).unwrap());

        assert!(session.state().is_annotated());
    }

    #[test]
    fn interactive_builder() {
        let session = SessionBuilder::new()
            .interactive()
            .with_distance_reporting(true)
            .build();

        assert_eq!(session.config().mode(), AnnotationMode::Interactive);
        assert!(session.distance_reporting());
        assert_eq!(*session.state(), AnnotationState::Empty);
    }

    #[test]
    fn config_from_json() {
        let config = AnnotationConfig::from_json(r#"{"origin_zoom": 17.0}"#).unwrap();
        let target = latlon!(21.0285, 105.8542).unwrap();
        let session = SessionBuilder::new()
            .with_config(config)
            .with_fixed_target(target)
            .build();

        assert_eq!(session.config().origin_zoom(), 17.0);
        assert_eq!(session.config().mode(), AnnotationMode::FixedTarget { target });
    }
}
