use geomark_types::geo::impls::GeoPoint2d;
use serde::{Deserialize, Serialize};

use crate::command::LineStyle;
use crate::error::GeomarkError;

const DEFAULT_ORIGIN_ZOOM: f64 = 15.0;
const DEFAULT_FIT_PADDING_PX: u32 = 300;
const DEFAULT_TARGET: GeoPoint2d = GeoPoint2d::new_const(10.762622, 106.660172);

/// Where the target point of an annotation comes from.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnnotationMode {
    /// Target is a constant point. It is set automatically as soon as the origin is known, and a
    /// tap on the drawn line reports the distance.
    FixedTarget {
        /// The point of interest.
        target: GeoPoint2d,
    },
    /// Target is the last point the user tapped on the map. Distance reporting is off unless
    /// enabled explicitly.
    Interactive,
}

impl AnnotationMode {
    /// Fixed target mode with the target given in degrees.
    ///
    /// Fails with [`GeomarkError::InvalidCoordinate`] if the coordinates are out of range.
    pub fn fixed_target(lat: f64, lon: f64) -> Result<Self, GeomarkError> {
        let target = GeoPoint2d::new(lat, lon)?;
        Ok(Self::FixedTarget { target })
    }

    /// Whether line taps report the distance when the configuration does not say otherwise.
    pub fn reports_distance_by_default(&self) -> bool {
        matches!(self, AnnotationMode::FixedTarget { .. })
    }
}

impl Default for AnnotationMode {
    fn default() -> Self {
        Self::FixedTarget {
            target: DEFAULT_TARGET,
        }
    }
}

/// Configuration of an annotation [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    mode: AnnotationMode,
    origin_zoom: f64,
    fit_padding_px: u32,
    line_style: LineStyle,
    origin_label: String,
    target_label: String,
    distance_reporting: Option<bool>,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            mode: AnnotationMode::default(),
            origin_zoom: DEFAULT_ORIGIN_ZOOM,
            fit_padding_px: DEFAULT_FIT_PADDING_PX,
            line_style: LineStyle::default(),
            origin_label: "Current location".to_string(),
            target_label: "Selected location".to_string(),
            distance_reporting: None,
        }
    }
}

impl AnnotationConfig {
    /// Parses configuration from a JSON document. Missing fields take their default values.
    ///
    /// ```
    /// use geomark::{AnnotationConfig, AnnotationMode};
    ///
    /// let config = AnnotationConfig::from_json(r#"{"mode": {"mode": "interactive"}}"#).unwrap();
    /// assert_eq!(config.mode(), AnnotationMode::Interactive);
    /// assert_eq!(config.fit_padding_px(), 300);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, GeomarkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration into a JSON document.
    pub fn to_json(&self) -> Result<String, GeomarkError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Where the target point comes from.
    pub fn mode(&self) -> AnnotationMode {
        self.mode
    }

    /// Sets where the target point comes from.
    pub fn with_mode(mut self, mode: AnnotationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets where the target point comes from.
    pub fn set_mode(&mut self, mode: AnnotationMode) {
        self.mode = mode;
    }

    /// Zoom level the camera is centered with when the origin becomes known for the first time.
    pub fn origin_zoom(&self) -> f64 {
        self.origin_zoom
    }

    /// Sets zoom level the camera is centered with when the origin becomes known for the first
    /// time.
    pub fn with_origin_zoom(mut self, zoom: f64) -> Self {
        self.origin_zoom = zoom;
        self
    }

    /// Padding in pixels around the origin and target when the camera is fitted to them.
    pub fn fit_padding_px(&self) -> u32 {
        self.fit_padding_px
    }

    /// Sets padding in pixels around the origin and target when the camera is fitted to them.
    pub fn with_fit_padding_px(mut self, padding: u32) -> Self {
        self.fit_padding_px = padding;
        self
    }

    /// Style of the line between origin and target.
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    /// Sets style of the line between origin and target.
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    /// Title of the origin marker.
    pub fn origin_label(&self) -> &str {
        &self.origin_label
    }

    /// Sets title of the origin marker.
    pub fn with_origin_label(mut self, label: impl Into<String>) -> Self {
        self.origin_label = label.into();
        self
    }

    /// Title of the target marker.
    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    /// Sets title of the target marker.
    pub fn with_target_label(mut self, label: impl Into<String>) -> Self {
        self.target_label = label.into();
        self
    }

    /// Whether tapping the line reports the distance between origin and target.
    ///
    /// Unless set explicitly, this is `true` for [`AnnotationMode::FixedTarget`] and `false` for
    /// [`AnnotationMode::Interactive`].
    pub fn distance_reporting(&self) -> bool {
        self.distance_reporting
            .unwrap_or_else(|| self.mode.reports_distance_by_default())
    }

    /// Enables or disables distance reporting regardless of the mode.
    pub fn with_distance_reporting(mut self, enabled: bool) -> Self {
        self.distance_reporting = Some(enabled);
        self
    }

    /// Enables or disables distance reporting regardless of the mode.
    pub fn set_distance_reporting(&mut self, enabled: bool) {
        self.distance_reporting = Some(enabled);
    }
}
