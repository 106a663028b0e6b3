use std::f32::consts::TAU;
use glam::Vec3;
use crate::api::config::{rgb, SceneConfig};

/// Flat disk mesh in the XY plane, facing the camera.
#[derive(Debug, Clone)]
pub struct CircleMesh {
    pub radius: f32,
    pub segments: u32,
    /// Linear RGB fill.
    pub color: [f32; 3],
    pub position: Vec3,
    pub scale: Vec3,
}

impl CircleMesh {
    pub fn new(radius: f32, segments: u32) -> Self {
        Self {
            radius,
            segments: segments.max(3),
            color: [1.0, 1.0, 1.0],
            position: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.circle_radius, config.circle_segments)
            .with_color(rgb(config.circle_color))
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Triangle-fan vertices in local space: the center, then `segments + 1`
    /// rim points (the last closes the fan onto the first).
    pub fn fan_vertices(&self) -> Vec<Vec3> {
        let mut verts = Vec::with_capacity(self.segments as usize + 2);
        verts.push(Vec3::ZERO);
        for i in 0..=self.segments {
            let theta = i as f32 / self.segments as f32 * TAU;
            verts.push(Vec3::new(theta.cos() * self.radius, theta.sin() * self.radius, 0.0));
        }
        verts
    }

    /// Radius after in-plane scaling (uses the larger axis).
    pub fn world_radius(&self) -> f32 {
        self.radius * self.scale.x.max(self.scale.y)
    }
}
