// page/layout.rs
//
// Layout measurement seam. Choreography reads geometry only through
// `LayoutMeasure`, so targets can be computed against a live document or
// against fixed rectangles in tests.

use std::collections::HashMap;
use crate::extensions::tween::Property;
use super::element::ElementId;

/// Axis-aligned box in CSS pixels, viewport-relative (like `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Viewport size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Width over height; falls back to 1.0 for a collapsed viewport.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Reads the current geometry and resolved styles of the page.
pub trait LayoutMeasure {
    /// Current viewport.
    fn viewport(&self) -> Viewport;

    /// Bounding box of an element, or `None` when it is not in the document.
    fn bounding_rect(&self, id: ElementId) -> Option<Rect>;

    /// Resolved (stylesheet) value of an animatable property, used as a tween's
    /// start value when no inline override exists.
    fn computed_style(&self, id: ElementId, prop: Property) -> f32 {
        layout_fallback(self, id, prop)
    }
}

/// Resolved value derived from geometry alone: position from the bounding box,
/// fully opaque, untranslated.
pub fn layout_fallback<L: LayoutMeasure + ?Sized>(layout: &L, id: ElementId, prop: Property) -> f32 {
    match prop {
        Property::Top => layout.bounding_rect(id).map_or(0.0, |r| r.top),
        Property::Left => layout.bounding_rect(id).map_or(0.0, |r| r.left),
        Property::Opacity => 1.0,
        _ => 0.0,
    }
}

/// Fixed geometry for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    viewport: Viewport,
    rects: HashMap<ElementId, Rect>,
    styles: HashMap<(ElementId, Property), f32>,
}

impl StaticLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn with_rect(mut self, id: ElementId, rect: Rect) -> Self {
        self.rects.insert(id, rect);
        self
    }

    pub fn with_style(mut self, id: ElementId, prop: Property, value: f32) -> Self {
        self.styles.insert((id, prop), value);
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl LayoutMeasure for StaticLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    fn computed_style(&self, id: ElementId, prop: Property) -> f32 {
        match self.styles.get(&(id, prop)) {
            Some(value) => *value,
            None => layout_fallback(self, id, prop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center() {
        let r = Rect::new(100.0, 50.0, 200.0, 40.0);
        assert_eq!(r.center_x(), 200.0);
    }

    #[test]
    fn collapsed_viewport_has_unit_aspect() {
        assert_eq!(Viewport::new(800.0, 0.0).aspect(), 1.0);
        assert!((Viewport::new(1920.0, 1080.0).aspect() - 16.0 / 9.0).abs() < 1e-5);
    }

    #[test]
    fn static_layout_falls_back_to_rect_for_position() {
        let layout = StaticLayout::new(Viewport::default())
            .with_rect(ElementId::SlotContainer, Rect::new(10.0, 544.0, 300.0, 20.0))
            .with_style(ElementId::SlotContainer, Property::Opacity, 0.0);

        assert_eq!(layout.computed_style(ElementId::SlotContainer, Property::Top), 544.0);
        assert_eq!(layout.computed_style(ElementId::SlotContainer, Property::Opacity), 0.0);
        assert_eq!(layout.computed_style(ElementId::SlotVoid, Property::Opacity), 1.0);
        assert_eq!(layout.computed_style(ElementId::SlotVoid, Property::TranslateX), 0.0);
    }
}
