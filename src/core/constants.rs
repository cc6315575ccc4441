// Tuning defaults for the gallery. Everything here is "feel" and can be
// overridden per page through `GalleryConfig`.

// Smooth scroll
pub const SCROLL_DAMPING: f32 = 0.1; // fraction of the remaining gap closed per 60 Hz frame
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp for backgrounded tabs
pub const REST_EPSILON: f32 = 0.01; // px; below this the scroll is at rest
pub const MAX_SCROLL_SPEED: f32 = 200.0; // px per frame

// Hover
pub const HOVER_DURATION_SEC: f32 = 1.0;
pub const HOVER_CENTER_UV: [f32; 2] = [0.5, 0.5];

// Shader clock
pub const TIME_STEP: f32 = 0.05; // added to `time` once per frame

// Distortion pass
pub const DISTORTION_COEFFICIENT: f32 = 0.1;
pub const DISTORTION_FADE_EDGE: f32 = 0.4; // uv.y at and above which there is no skew

// Camera: positioned so one world unit maps to one CSS pixel at z = 0
pub const CAMERA_DISTANCE: f32 = 600.0;
pub const CAMERA_NEAR: f32 = 100.0;
pub const CAMERA_FAR: f32 = 2000.0;

// Geometry
pub const PLANE_SEGMENTS: u32 = 16;
