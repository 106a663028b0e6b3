use glam::Vec3;
use crate::api::config::SceneConfig;

/// Canvas the label text is rasterized onto before upload as a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCanvas {
    pub width: u32,
    pub height: u32,
}

impl Default for LabelCanvas {
    fn default() -> Self {
        Self { width: 512, height: 128 }
    }
}

/// Billboard text sprite. The host rasterizes `text` in `font`, black, centered
/// on `canvas`, and draws it with this transform and opacity.
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub text: String,
    pub font: String,
    pub canvas: LabelCanvas,
    pub position: Vec3,
    /// Sprite size in world units; matches the canvas 4:1 aspect.
    pub scale: Vec3,
    pub opacity: f32,
}

impl TextLabel {
    /// Just in front of the circle.
    pub const DEPTH: f32 = 0.1;

    pub fn new(text: impl Into<String>, font: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            canvas: LabelCanvas::default(),
            position: Vec3::new(0.0, 0.0, Self::DEPTH),
            scale: Vec3::new(4.0, 1.0, 1.0),
            opacity: 1.0,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.label_text.clone(), config.label_font.clone())
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
