//! Renderer seam.
//!
//! Rasterization happens outside the engine (the browser host draws with its
//! own 3D library). The engine decides *when* a frame is drawn and *what* it
//! contains; a `SceneRenderer` receives that and presents it.

use crate::core::scene::Scene;
use crate::page::layout::Viewport;
use super::camera::PerspectiveCamera;

/// Drawing-buffer size derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSurface {
    /// CSS size.
    pub width: f32,
    pub height: f32,
    /// Device pixels per CSS pixel, after capping.
    pub pixel_ratio: f32,
}

impl RenderSurface {
    /// Size the surface to the viewport with pixel density capped at `max_pixel_ratio`.
    pub fn fit(viewport: Viewport, max_pixel_ratio: f32) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            pixel_ratio: viewport.device_pixel_ratio.min(max_pixel_ratio).max(0.0),
        }
    }

    /// Backing-store size in device pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round().max(0.0) as u32,
            (self.height * self.pixel_ratio).round().max(0.0) as u32,
        )
    }
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self::fit(Viewport::default(), 2.0)
    }
}

/// Everything needed to draw one frame.
pub struct FrameData<'a> {
    pub scene: &'a Scene,
    pub camera: &'a PerspectiveCamera,
}

/// Presents landing frames.
pub trait SceneRenderer {
    /// Draw one frame.
    fn render(&mut self, frame: &FrameData);

    /// The viewport changed; resize the drawing buffer synchronously.
    fn resize(&mut self, surface: RenderSurface);

    /// Frames drawn so far.
    fn frames_rendered(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped() {
        let surface = RenderSurface::fit(Viewport::new(1000.0, 500.0).with_pixel_ratio(3.0), 2.0);
        assert_eq!(surface.pixel_ratio, 2.0);
        assert_eq!(surface.physical_size(), (2000, 1000));
    }

    #[test]
    fn low_density_passes_through() {
        let surface = RenderSurface::fit(Viewport::new(800.0, 600.0).with_pixel_ratio(1.5), 2.0);
        assert_eq!(surface.pixel_ratio, 1.5);
        assert_eq!(surface.physical_size(), (1200, 900));
    }
}
