pub mod camera;
pub mod config;
pub mod constants;
pub mod distortion;
pub mod driver;
pub mod geometry;
pub mod hover;
pub mod layout;
pub mod material;
pub mod picking;
pub mod registry;
pub mod scene;
pub mod scroll;
pub mod sketch;
pub mod uniforms;

pub use config::GalleryConfig;
pub use driver::{Clock, FrameDriver, InstantClock, ManualClock};
pub use layout::{LayoutRect, Viewport};
pub use scene::{FrameView, SceneRenderer};
pub use sketch::{Lifecycle, Sketch, SketchError};

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
