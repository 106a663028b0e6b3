pub mod camera;
pub mod frame;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{CameraUniform, PerspectiveCamera};
pub use frame::{FrameBuffer, FrameRecord};
pub use traits::{FrameData, RenderSurface, SceneRenderer};
