use crate::core::hover::HoverTween;
use crate::core::layout::{mesh_position, LayoutRect, Viewport};
use crate::core::material::MaterialUniforms;
use crate::core::scene::SceneRenderer;
use glam::Vec3;

/// One page image bound to one mesh.
#[derive(Clone, Debug)]
pub struct TrackedImage<H> {
    pub handle: H,
    pub rect: LayoutRect,
    pub position: Vec3,
    pub material: MaterialUniforms,
    pub hover: HoverTween,
}

/// Owns the image ↔ mesh bindings and is the only place mesh placement and
/// material uniforms are written. Pointer and uniform code reach the
/// meshes through the accessors below.
pub struct MeshRegistry<H> {
    meshes: Vec<TrackedImage<H>>,
    template: MaterialUniforms,
    hover_duration: f32,
}

impl<H> MeshRegistry<H> {
    pub fn new(template: MaterialUniforms, hover_duration: f32) -> Self {
        Self {
            meshes: Vec::new(),
            template,
            hover_duration,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    #[inline]
    pub fn meshes(&self) -> &[TrackedImage<H>] {
        &self.meshes
    }

    /// Read each handle's rectangle once and create its mesh.
    ///
    /// Degenerate rectangles and images the renderer cannot upload are
    /// skipped. Returns how many meshes were added.
    pub fn bind<I, F>(
        &mut self,
        handles: I,
        mut rect_of: F,
        scroll_offset: f32,
        viewport: &Viewport,
        renderer: &mut dyn SceneRenderer<H>,
    ) -> usize
    where
        I: IntoIterator<Item = H>,
        F: FnMut(&H) -> LayoutRect,
    {
        let before = self.meshes.len();
        for (i, handle) in handles.into_iter().enumerate() {
            let rect = rect_of(&handle);
            if rect.is_degenerate() {
                log::debug!("[registry] skipping image {i}: degenerate rect {rect:?}");
                continue;
            }
            let tracked = TrackedImage {
                handle,
                rect,
                position: mesh_position(&rect, scroll_offset, viewport),
                material: self.template.clone(),
                hover: HoverTween::new(self.hover_duration),
            };
            if let Err(e) = renderer.add_mesh(&tracked) {
                log::warn!("[registry] skipping image {i}: {e:?}");
                continue;
            }
            self.meshes.push(tracked);
        }
        let added = self.meshes.len() - before;
        log::info!("[registry] bound {added} meshes ({} total)", self.meshes.len());
        added
    }

    /// Place every mesh for the current scroll offset. Rectangles are
    /// never re-read; the viewport is taken fresh on every call.
    pub fn reposition(&mut self, scroll_offset: f32, viewport: &Viewport) {
        for m in &mut self.meshes {
            m.position = mesh_position(&m.rect, scroll_offset, viewport);
        }
    }

    pub fn set_hover_uv(&mut self, index: usize, uv: [f32; 2]) {
        if let Some(m) = self.meshes.get_mut(index) {
            m.material.hover = uv;
        }
    }

    pub fn hover_enter(&mut self, index: usize, now: f64) {
        if let Some(m) = self.meshes.get_mut(index) {
            m.hover.enter(now);
        }
    }

    pub fn hover_leave(&mut self, index: usize, now: f64) {
        if let Some(m) = self.meshes.get_mut(index) {
            m.hover.leave(now);
        }
    }

    /// Visit each mesh's material together with its hover tween.
    pub fn for_each_material_mut(
        &mut self,
        mut f: impl FnMut(&mut MaterialUniforms, &HoverTween),
    ) {
        for m in &mut self.meshes {
            f(&mut m.material, &m.hover);
        }
    }

    /// Index of the mesh bound to `handle`, if any.
    pub fn index_of(&self, handle: &H) -> Option<usize>
    where
        H: PartialEq,
    {
        self.meshes.iter().position(|m| &m.handle == handle)
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}
