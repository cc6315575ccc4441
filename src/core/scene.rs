use crate::core::camera::Camera;
use crate::core::distortion::CompositeUniforms;
use crate::core::layout::Viewport;
use crate::core::registry::TrackedImage;

/// Everything a renderer needs to draw one frame, borrowed from the sketch
/// after the scroll, reposition and uniform steps have run.
pub struct FrameView<'a, H> {
    pub viewport: &'a Viewport,
    pub camera: &'a Camera,
    pub meshes: &'a [TrackedImage<H>],
    pub composite: &'a CompositeUniforms,
}

/// The GPU side of the sketch.
///
/// The wasm front-end implements this with wgpu; tests implement it with a
/// recorder. Meshes are created in the same order they appear in the
/// registry, so `FrameView::meshes[i]` always pairs with the i-th mesh the
/// renderer created.
pub trait SceneRenderer<H> {
    /// Create GPU resources (geometry, texture, uniform set) for one image.
    /// An error skips that image; the renderer must not keep partial state
    /// for it.
    fn add_mesh(&mut self, mesh: &TrackedImage<H>) -> anyhow::Result<()>;

    /// Match the drawing surface to a new viewport.
    fn resize(&mut self, viewport: &Viewport);

    /// Scene pass followed by the distortion pass.
    fn render(&mut self, frame: &FrameView<'_, H>) -> anyhow::Result<()>;
}
