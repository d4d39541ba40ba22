//! State machine deciding which render commands an origin or target change produces.

use geomark_types::geo::distance::distance;
use geomark_types::geo::impls::GeoPoint2d;
use geomark_types::geo::Distance;
use log::debug;

use crate::camera::BoundingRegion;
use crate::command::{MarkerRole, RenderCommand};
use crate::config::AnnotationConfig;
use crate::error::GeomarkError;

/// Known points of the annotation.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum AnnotationState {
    /// The current location is not known yet.
    #[default]
    Empty,
    /// The current location is known, but there is nothing to connect it to.
    OriginSet {
        /// Current location.
        origin: GeoPoint2d,
    },
    /// Both points are known and drawn.
    Annotated {
        /// Current location.
        origin: GeoPoint2d,
        /// Target point.
        target: GeoPoint2d,
    },
}

impl AnnotationState {
    /// The current location, if known.
    pub fn origin(&self) -> Option<GeoPoint2d> {
        match self {
            AnnotationState::Empty => None,
            AnnotationState::OriginSet { origin } | AnnotationState::Annotated { origin, .. } => {
                Some(*origin)
            }
        }
    }

    /// The target point, if set.
    pub fn target(&self) -> Option<GeoPoint2d> {
        match self {
            AnnotationState::Annotated { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Whether both points are known.
    pub fn is_annotated(&self) -> bool {
        matches!(self, AnnotationState::Annotated { .. })
    }
}

/// Owns the [`AnnotationState`] of a session and turns point updates into [`RenderCommand`]s.
///
/// The annotator does not talk to the map itself: every transition returns the commands the
/// renderer should execute, in order.
#[derive(Debug, Clone)]
pub struct Annotator {
    state: AnnotationState,
    config: AnnotationConfig,
    camera_centered: bool,
}

impl Annotator {
    /// Creates an annotator in the [`AnnotationState::Empty`] state.
    pub fn new(config: AnnotationConfig) -> Self {
        Self {
            state: AnnotationState::Empty,
            config,
            camera_centered: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AnnotationState {
        &self.state
    }

    /// Configuration the annotator was created with.
    pub fn config(&self) -> &AnnotationConfig {
        &self.config
    }

    /// Sets (or replaces) the current location.
    ///
    /// Always places the origin marker. The first origin of the session also centers the camera
    /// on it. If a target is already set, the line and the camera fit are redone for the new
    /// origin.
    pub fn set_origin(&mut self, origin: GeoPoint2d) -> Vec<RenderCommand> {
        let mut commands = vec![self.marker(MarkerRole::Origin, origin)];

        if !self.camera_centered {
            self.camera_centered = true;
            commands.push(RenderCommand::CenterCamera {
                position: origin,
                zoom: self.config.origin_zoom(),
            });
        }

        self.state = match self.state {
            AnnotationState::Empty | AnnotationState::OriginSet { .. } => {
                debug!("Origin set to {origin}");
                AnnotationState::OriginSet { origin }
            }
            AnnotationState::Annotated { target, .. } => {
                debug!("Origin moved to {origin}, redrawing annotation to {target}");
                commands.push(self.line(origin, target));
                commands.push(self.fit(origin, target));
                AnnotationState::Annotated { origin, target }
            }
        };

        commands
    }

    /// Sets (or replaces) the target point.
    ///
    /// Ignored while the origin is unknown: there is nothing to connect the target to. Otherwise
    /// places the target marker, draws the line from the origin and fits the camera to both
    /// points.
    pub fn set_target(&mut self, target: GeoPoint2d) -> Vec<RenderCommand> {
        let Some(origin) = self.state.origin() else {
            debug!("Target {target} ignored: origin is not known yet");
            return vec![];
        };

        debug!("Target set to {target}");
        self.state = AnnotationState::Annotated { origin, target };

        vec![
            self.marker(MarkerRole::Target, target),
            self.line(origin, target),
            self.fit(origin, target),
        ]
    }

    /// Distance between origin and target. Computed on every call.
    pub fn request_distance(&self) -> Result<Distance, GeomarkError> {
        match self.state {
            AnnotationState::Annotated { origin, target } => Ok(distance(&origin, &target)),
            _ => Err(GeomarkError::NotAnnotated),
        }
    }

    fn marker(&self, role: MarkerRole, position: GeoPoint2d) -> RenderCommand {
        let label = match role {
            MarkerRole::Origin => self.config.origin_label(),
            MarkerRole::Target => self.config.target_label(),
        };

        RenderCommand::PlaceMarker {
            role,
            position,
            label: label.to_string(),
        }
    }

    fn line(&self, from: GeoPoint2d, to: GeoPoint2d) -> RenderCommand {
        RenderCommand::DrawLine {
            from,
            to,
            style: self.config.line_style(),
        }
    }

    fn fit(&self, origin: GeoPoint2d, target: GeoPoint2d) -> RenderCommand {
        RenderCommand::AnimateToBounds(BoundingRegion::enclosing(
            &origin,
            &target,
            self.config.fit_padding_px(),
        ))
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(AnnotationConfig::default())
    }
}
