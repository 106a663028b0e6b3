use serde::Deserialize;
use crate::api::error::{LandingError, Result};

/// How the idle float's clock advances each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleTiming {
    /// Add `IdleConfig::step` per frame regardless of real frame time.
    /// Runs faster on high-refresh displays.
    #[default]
    FixedStep,
    /// Add the measured frame delta.
    WallClock,
}

/// Scene constants: camera, circle, label.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Camera distance from the origin along +Z.
    pub camera_distance: f32,
    /// Renderer pixel ratio is `min(devicePixelRatio, max_pixel_ratio)`.
    pub max_pixel_ratio: f32,
    pub background: u32,
    pub circle_radius: f32,
    pub circle_segments: u32,
    pub circle_color: u32,
    pub label_text: String,
    pub label_font: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            near: 0.1,
            far: 1000.0,
            camera_distance: 10.0,
            max_pixel_ratio: 2.0,
            background: 0x000000,
            circle_radius: 2.0,
            circle_segments: 64,
            circle_color: 0xffffff,
            label_text: "enter".to_string(),
            label_font: "bold 60px Arial, sans-serif".to_string(),
        }
    }
}

/// Idle float parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    pub amplitude: f32,
    /// Angular frequency in radians per second of idle time.
    pub frequency: f32,
    /// Per-frame increment under `IdleTiming::FixedStep`.
    pub step: f32,
    pub timing: IdleTiming,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.15,
            frequency: 0.8,
            step: 0.016,
            timing: IdleTiming::FixedStep,
        }
    }
}

/// Geometry of the enter and card choreographies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChoreographyConfig {
    /// In-plane circle scale at the end of the enter transition.
    pub circle_scale: f32,
    /// Camera distance at the end of the enter transition.
    pub camera_zoom_distance: f32,
    /// Delay between consecutive card fade-ins.
    pub card_stagger: f32,
    /// How far the card's bottom overlaps the slot's top edge.
    pub slot_overlap: f32,
    /// Gap between the card and the slot at the staging point.
    pub staging_gap: f32,
    /// Extra distance past half the viewport that siblings slide.
    pub slide_margin: f32,
    /// Bounce overshoot when the card lands.
    pub bounce: f32,
    /// Slot container top once promoted to the header.
    pub header_top: f32,
    /// Void backdrop sits this far below the slot container.
    pub void_offset: f32,
    /// Slot container top at rest is `viewport.height / 2 + slot_center_offset`.
    pub slot_center_offset: f32,
    /// How far the card rises out of the slot on the way back.
    pub eject_lift: f32,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            circle_scale: 50.0,
            camera_zoom_distance: 5.0,
            card_stagger: 0.1,
            slot_overlap: 40.0,
            staging_gap: 20.0,
            slide_margin: 200.0,
            bounce: 3.0,
            header_top: 60.0,
            void_offset: 4.0,
            slot_center_offset: 184.0,
            eject_lift: 100.0,
        }
    }
}

/// Top-level landing configuration. Every field has a default, so a partial
/// (or empty) JSON object is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub scene: SceneConfig,
    pub idle: IdleConfig,
    pub choreography: ChoreographyConfig,
}

impl LandingConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(LandingError::Config)
    }
}

/// Split a `0xRRGGBB` color into linear [0, 1] channels.
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::LandingError;

    #[test]
    fn empty_object_yields_defaults() {
        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config.scene.fov_degrees, 50.0);
        assert_eq!(config.scene.circle_segments, 64);
        assert_eq!(config.idle.timing, IdleTiming::FixedStep);
        assert_eq!(config.choreography.slot_overlap, 40.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let json = r#"{
            "idle": { "timing": "wall_clock", "amplitude": 0.3 },
            "choreography": { "header_top": 80 }
        }"#;
        let config = LandingConfig::from_json(json).unwrap();
        assert_eq!(config.idle.timing, IdleTiming::WallClock);
        assert_eq!(config.idle.amplitude, 0.3);
        assert_eq!(config.idle.frequency, 0.8);
        assert_eq!(config.choreography.header_top, 80.0);
        assert_eq!(config.choreography.void_offset, 4.0);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LandingConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }

    #[test]
    fn rgb_splits_channels() {
        assert_eq!(rgb(0xffffff), [1.0, 1.0, 1.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0]);
        assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0]);
    }
}
