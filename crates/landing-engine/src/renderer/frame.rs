use bytemuck::{Pod, Zeroable};
use crate::bridge::protocol::PROTOCOL_VERSION;
use super::traits::{FrameData, RenderSurface, SceneRenderer};

/// One frame, flattened for the host renderer. Field order is the wire
/// format described in `bridge::protocol`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameRecord {
    pub frame_counter: f32,
    pub protocol_version: f32,
    pub surface_width: f32,
    pub surface_height: f32,
    pub pixel_ratio: f32,
    pub background: [f32; 3],

    pub circle_position: [f32; 3],
    pub circle_scale: [f32; 3],
    pub circle_color: [f32; 3],
    pub circle_radius: f32,
    pub circle_segments: f32,

    pub label_position: [f32; 3],
    pub label_scale: [f32; 3],
    pub label_opacity: f32,

    pub camera_position: [f32; 3],
    pub camera_fov: f32,
    pub camera_aspect: f32,
    pub camera_near: f32,
    pub camera_far: f32,

    pub view_projection: [[f32; 4]; 4],
}

/// `SceneRenderer` that packs each frame into a `FrameRecord` the host reads
/// through a pointer into WASM memory.
pub struct FrameBuffer {
    record: FrameRecord,
    surface: RenderSurface,
    frames: u64,
}

impl FrameBuffer {
    pub fn new(surface: RenderSurface) -> Self {
        let mut record = FrameRecord::zeroed();
        record.protocol_version = PROTOCOL_VERSION;
        let mut buffer = Self {
            record,
            surface,
            frames: 0,
        };
        buffer.write_surface();
        buffer
    }

    fn write_surface(&mut self) {
        self.record.surface_width = self.surface.width;
        self.record.surface_height = self.surface.height;
        self.record.pixel_ratio = self.surface.pixel_ratio;
    }

    pub fn record(&self) -> &FrameRecord {
        &self.record
    }

    pub fn surface(&self) -> RenderSurface {
        self.surface
    }

    /// The record as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(&self.record))
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }
}

impl SceneRenderer for FrameBuffer {
    fn render(&mut self, frame: &FrameData) {
        let circle = &frame.scene.circle;
        let label = &frame.scene.label;
        let camera = frame.camera;

        self.frames += 1;
        let r = &mut self.record;
        r.frame_counter = self.frames as f32;
        r.background = frame.scene.background;

        r.circle_position = circle.position.to_array();
        r.circle_scale = circle.scale.to_array();
        r.circle_color = circle.color;
        r.circle_radius = circle.radius;
        r.circle_segments = circle.segments as f32;

        r.label_position = label.position.to_array();
        r.label_scale = label.scale.to_array();
        r.label_opacity = label.opacity;

        r.camera_position = camera.position.to_array();
        r.camera_fov = camera.fov_degrees;
        r.camera_aspect = camera.aspect;
        r.camera_near = camera.near;
        r.camera_far = camera.far;
        r.view_projection = camera.uniform().view_projection;
    }

    fn resize(&mut self, surface: RenderSurface) {
        self.surface = surface;
        self.write_surface();
    }

    fn frames_rendered(&self) -> u64 {
        self.frames
    }
}
