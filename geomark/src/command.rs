//! Commands produced by the annotation engine and consumed by a [`MapRenderer`](crate::render::MapRenderer).

use geomark_types::geo::impls::GeoPoint2d;
use serde::{Deserialize, Serialize};

use crate::camera::BoundingRegion;
use crate::color::Color;

/// Which of the two annotated points a marker belongs to.
///
/// Renderers keep at most one marker per role, so placing a marker for a role replaces the
/// previous one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    /// The user's current location.
    Origin,
    /// Fixed point of interest or the last tapped point.
    Target,
}

/// Style of the line connecting origin and target.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Width of the line in pixels.
    pub width: f32,
    /// Color of the line.
    pub color: Color,
    /// Whether the renderer should report taps on the line as
    /// [`MapEvent::LineTapped`](crate::control::MapEvent::LineTapped).
    pub clickable: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 10.0,
            color: Color::RED,
            clickable: true,
        }
    }
}

/// Single drawing instruction for the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RenderCommand {
    /// Put a marker with a title at the position.
    PlaceMarker {
        /// Point the marker belongs to.
        role: MarkerRole,
        /// Position of the marker.
        position: GeoPoint2d,
        /// Marker title.
        label: String,
    },
    /// Draw a straight (great-circle) line between two points, replacing the previous one.
    DrawLine {
        /// Start of the line.
        from: GeoPoint2d,
        /// End of the line.
        to: GeoPoint2d,
        /// Line style.
        style: LineStyle,
    },
    /// Move the camera to the point immediately.
    CenterCamera {
        /// New camera center.
        position: GeoPoint2d,
        /// Zoom level in the web map tile scheme.
        zoom: f64,
    },
    /// Gradually move the camera so that the region is fully visible.
    AnimateToBounds(BoundingRegion),
}

impl RenderCommand {
    /// Short name of the command, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            RenderCommand::PlaceMarker { .. } => "place_marker",
            RenderCommand::DrawLine { .. } => "draw_line",
            RenderCommand::CenterCamera { .. } => "center_camera",
            RenderCommand::AnimateToBounds(_) => "animate_to_bounds",
        }
    }
}

#[cfg(test)]
mod tests {
    use geomark_types::latlon;

    use super::*;

    #[test]
    fn serializes_with_tag() {
        let command = RenderCommand::CenterCamera {
            position: latlon!(10.0, 106.0).unwrap(),
            zoom: 15.0,
        };

        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["command"], "center_camera");
        assert_eq!(value["zoom"], 15.0);
        assert_eq!(value["position"]["lat"], 10.0);

        let restored: RenderCommand = serde_json::from_value(value).unwrap();
        assert_eq!(restored, command);
    }

    #[test]
    fn default_line_style_is_red_and_clickable() {
        let style = LineStyle::default();
        assert_eq!(style.width, 10.0);
        assert_eq!(style.color, Color::RED);
        assert!(style.clickable);
    }
}
