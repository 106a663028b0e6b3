// extensions/tween.rs
//
// Tween records: plain data describing one animated property set.
// A tween never touches the stage itself; the timeline reads start values
// and writes eased values through a `TimelineHost`.
//
// Usage:
//   let tween = Tween::new(TweenTarget::Camera, 0.6, Easing::CubicIn)
//       .to(Property::PositionZ, 5.0)
//       .rendering();

use serde::Serialize;
use crate::page::element::ElementId;
use super::easing::{Easing, ease};

/// What object a tween animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TweenTarget {
    /// The landing circle mesh.
    Circle,
    /// The "enter" text sprite.
    Label,
    /// The perspective camera.
    Camera,
    /// A page element (inline style overrides).
    Element(ElementId),
}

/// Which numeric property of the target is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Property {
    ScaleX,
    ScaleY,
    ScaleZ,
    PositionY,
    PositionZ,
    Opacity,
    /// Fixed-position `top`, in CSS pixels.
    Top,
    /// Fixed-position `left`, in CSS pixels.
    Left,
    /// `transform: translateX`, in CSS pixels.
    TranslateX,
    /// `transform: translateY`, in CSS pixels.
    TranslateY,
}

/// A single tween: animate `values` on `target` over `duration` seconds.
///
/// `C` is the cue type fired on completion; it is chosen by whoever builds
/// the timeline.
#[derive(Debug, Clone)]
pub struct Tween<C> {
    /// What to animate.
    pub target: TweenTarget,
    /// Destination values, applied in order.
    pub values: Vec<(Property, f32)>,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function.
    pub easing: Easing,
    /// Ask the host for a redraw on every update.
    pub render_on_update: bool,
    /// Optional cue fired once when the tween completes.
    pub on_complete: Option<C>,
}

impl<C: Copy> Tween<C> {
    pub fn new(target: TweenTarget, duration: f32, easing: Easing) -> Self {
        Self {
            target,
            values: Vec::with_capacity(3),
            duration,
            easing,
            render_on_update: false,
            on_complete: None,
        }
    }

    // -- Builder methods --

    /// Add a destination value for `prop`.
    pub fn to(mut self, prop: Property, value: f32) -> Self {
        self.values.push((prop, value));
        self
    }

    pub fn rendering(mut self) -> Self {
        self.render_on_update = true;
        self
    }

    pub fn with_on_complete(mut self, cue: C) -> Self {
        self.on_complete = Some(cue);
        self
    }

    /// Slack when deciding a tween has reached its end. Offsets and durations
    /// are authored in decimal seconds that f32 cannot represent exactly.
    pub const END_EPSILON: f32 = 1e-4;

    /// Normalized progress [0, 1] after `local` seconds.
    pub fn progress(&self, local: f32) -> f32 {
        if self.duration <= 0.0 || local >= self.duration - Self::END_EPSILON {
            1.0
        } else {
            (local / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Eased value of the `index`-th property at progress `t`.
    pub fn sample(&self, index: usize, from: f32, t: f32) -> f32 {
        ease(from, self.values[index].1, t, self.easing)
    }

    /// Destination value for `prop`, if this tween animates it.
    pub fn target_value(&self, prop: Property) -> Option<f32> {
        self.values.iter().find(|(p, _)| *p == prop).map(|(_, v)| *v)
    }
}
