/// Frame buffer layout.
/// Must stay in sync with the host's `frame-protocol.ts`.
///
/// Layout (all values f32, offsets in floats):
/// ```text
/// [ 0] frame_counter       [ 1] protocol_version
/// [ 2] surface_width       [ 3] surface_height     [ 4] pixel_ratio
/// [ 5] background rgb
/// [ 8] circle position xyz [11] circle scale xyz   [14] circle color rgb
/// [17] circle radius       [18] circle segments
/// [19] label position xyz  [22] label scale xyz    [25] label opacity
/// [26] camera position xyz [29] fov  [30] aspect  [31] near  [32] far
/// [33] view-projection, 16 floats, column-major
/// ```
///
/// The host re-reads the buffer whenever `frame_counter` changes.

use crate::renderer::frame::FrameRecord;

/// Protocol version written into every record.
pub const PROTOCOL_VERSION: f32 = 1.0;

pub const FRAME_COUNTER: usize = 0;
pub const VERSION: usize = 1;
pub const SURFACE_WIDTH: usize = 2;
pub const SURFACE_HEIGHT: usize = 3;
pub const PIXEL_RATIO: usize = 4;
pub const BACKGROUND: usize = 5;
pub const CIRCLE_POSITION: usize = 8;
pub const CIRCLE_SCALE: usize = 11;
pub const CIRCLE_COLOR: usize = 14;
pub const CIRCLE_RADIUS: usize = 17;
pub const CIRCLE_SEGMENTS: usize = 18;
pub const LABEL_POSITION: usize = 19;
pub const LABEL_SCALE: usize = 22;
pub const LABEL_OPACITY: usize = 25;
pub const CAMERA_POSITION: usize = 26;
pub const CAMERA_FOV: usize = 29;
pub const CAMERA_ASPECT: usize = 30;
pub const CAMERA_NEAR: usize = 31;
pub const CAMERA_FAR: usize = 32;
pub const VIEW_PROJECTION: usize = 33;

/// Total record size in floats.
pub const FRAME_FLOATS: usize = std::mem::size_of::<FrameRecord>() / 4;
