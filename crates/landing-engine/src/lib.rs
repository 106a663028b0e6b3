pub mod api;
pub mod core;
pub mod components;
pub mod choreography;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod page;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{ChoreographyConfig, IdleConfig, IdleTiming, LandingConfig, SceneConfig};
pub use api::error::{LandingError, Result};
pub use api::landing::Landing;
pub use api::stage::Stage;
pub use choreography::{Cue, LandingTimeline};
pub use components::mesh::CircleMesh;
pub use components::sprite::{LabelCanvas, TextLabel};
pub use core::phase::{CardPhase, EnterPhase, PhaseMachine};
pub use core::scene::Scene;
pub use core::time::{float_offset, IdleClock};
pub use input::queue::{InputEvent, InputQueue};
pub use page::{
    CardIndex, ClassName, Cursor, ElementId, ElementState, InlineStyle,
    LayoutMeasure, PageState, Rect, StaticLayout, Viewport,
};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::frame::{FrameBuffer, FrameRecord};
pub use renderer::traits::{FrameData, RenderSurface, SceneRenderer};
pub use bridge::protocol::{FRAME_FLOATS, PROTOCOL_VERSION};

// Extensions: animation building blocks
pub use extensions::{
    Easing, lerp, ease,
    Step, Timeline, TimelineHost,
    Property, Tween, TweenTarget,
};
