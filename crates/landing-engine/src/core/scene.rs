use crate::api::config::{rgb, SceneConfig};
use crate::components::mesh::CircleMesh;
use crate::components::sprite::TextLabel;

/// The landing scene: a disk with a text label on a flat background.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Linear RGB clear color.
    pub background: [f32; 3],
    pub circle: CircleMesh,
    pub label: TextLabel,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            background: rgb(config.background),
            circle: CircleMesh::from_config(config),
            label: TextLabel::from_config(config),
        }
    }

    /// Vertical float offset applied to the circle; the label follows it.
    pub fn set_float_offset(&mut self, y: f32) {
        self.circle.position.y = y;
        self.label.position.y = self.circle.position.y;
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
