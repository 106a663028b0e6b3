// extensions/mod.rs
//
// Animation building blocks. None of these know about the landing itself:
// tweens and timelines talk to the world through `TimelineHost`.

pub mod easing;
pub mod timeline;
pub mod tween;

pub use easing::{Easing, lerp, ease};
pub use timeline::{Step, Timeline, TimelineHost};
pub use tween::{Property, Tween, TweenTarget};
