//! The gallery's context object.
//!
//! A [`Sketch`] owns every piece of frame state (viewport, camera, scroll,
//! mesh registry, composite uniforms) and is passed explicitly to whatever
//! drives it. Lifecycle: `new` → `start` → running frames → `dispose`.

use crate::core::camera::Camera;
use crate::core::config::GalleryConfig;
use crate::core::distortion::CompositeUniforms;
use crate::core::layout::{LayoutRect, Viewport};
use crate::core::material::MaterialUniforms;
use crate::core::picking::{ndc_from_client, pick, Ray};
use crate::core::registry::MeshRegistry;
use crate::core::scene::{FrameView, SceneRenderer};
use crate::core::scroll::SmoothScroll;
use crate::core::uniforms;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SketchError {
    #[error("sketch already started")]
    AlreadyStarted,
    #[error("sketch has been disposed")]
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Running,
    Disposed,
}

pub struct Sketch<H> {
    config: GalleryConfig,
    viewport: Viewport,
    camera: Camera,
    scroll: SmoothScroll,
    registry: MeshRegistry<H>,
    composite: CompositeUniforms,
    lifecycle: Lifecycle,
}

impl<H> Sketch<H> {
    pub fn new(config: GalleryConfig, viewport: Viewport) -> Self {
        let config = config.validated();
        let camera = Camera::for_viewport(
            &viewport,
            config.camera_distance,
            config.camera_near,
            config.camera_far,
        );
        Self {
            scroll: SmoothScroll::new(config.scroll_damping, config.max_scroll_speed),
            registry: MeshRegistry::new(MaterialUniforms::default(), config.hover_duration_sec),
            composite: CompositeUniforms::from_config(&config),
            config,
            viewport,
            camera,
            lifecycle: Lifecycle::Constructed,
        }
    }

    /// Bind the ready images and enter the running state.
    ///
    /// Precondition: fonts and images are loaded and laid out. Rectangles
    /// are captured here once; calling this before layout settles captures
    /// wrong positions and nothing in the sketch can detect that.
    pub fn start<I, F>(
        &mut self,
        images: I,
        rect_of: F,
        renderer: &mut dyn SceneRenderer<H>,
    ) -> Result<usize, SketchError>
    where
        I: IntoIterator<Item = H>,
        F: FnMut(&H) -> LayoutRect,
    {
        match self.lifecycle {
            Lifecycle::Running => return Err(SketchError::AlreadyStarted),
            Lifecycle::Disposed => return Err(SketchError::Disposed),
            Lifecycle::Constructed => {}
        }
        renderer.resize(&self.viewport);
        let bound = self.registry.bind(
            images,
            rect_of,
            self.scroll.rendered(),
            &self.viewport,
            renderer,
        );
        self.lifecycle = Lifecycle::Running;
        log::info!("[sketch] started with {bound} meshes");
        Ok(bound)
    }

    /// Drop all meshes; further frames and events are ignored.
    pub fn dispose(&mut self) {
        if self.lifecycle != Lifecycle::Disposed {
            self.registry.clear();
            self.lifecycle = Lifecycle::Disposed;
            log::info!("[sketch] disposed");
        }
    }

    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scroll(&self) -> &SmoothScroll {
        &self.scroll
    }

    pub fn registry(&self) -> &MeshRegistry<H> {
        &self.registry
    }

    pub fn composite(&self) -> &CompositeUniforms {
        &self.composite
    }

    pub fn on_native_scroll(&mut self, raw_offset: f32) {
        self.scroll.on_native_scroll(raw_offset);
    }

    /// Start the smoothed offset at `offset` instead of easing in from 0.
    pub fn jump_scroll_to(&mut self, offset: f32) {
        self.scroll.jump_to(offset);
        self.registry.reposition(self.scroll.rendered(), &self.viewport);
    }

    /// Store the new viewport, refit the camera and resize the surface.
    /// Only the inputs matter, so repeated calls with the same size are
    /// harmless even in the middle of a scroll gesture.
    pub fn on_resize(&mut self, viewport: Viewport, renderer: &mut dyn SceneRenderer<H>) {
        self.viewport = viewport;
        self.camera.fit_viewport(&self.viewport);
        renderer.resize(&self.viewport);
        self.registry.reposition(self.scroll.rendered(), &self.viewport);
    }

    /// Hit-test the pointer and feed the surface coordinate of the nearest
    /// mesh into its `hover` uniform. Misses leave the last value in place.
    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) -> Option<usize> {
        if self.registry.is_empty() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        let ndc = ndc_from_client(client_x, client_y, &self.viewport);
        let ray = Ray::from_ndc(&self.camera, ndc);
        let hit = pick(&ray, self.registry.meshes())?;
        self.registry.set_hover_uv(hit.index, hit.uv);
        Some(hit.index)
    }

    pub fn hover_enter(&mut self, index: usize, now: f64) {
        self.registry.hover_enter(index, now);
    }

    pub fn hover_leave(&mut self, index: usize, now: f64) {
        self.registry.hover_leave(index, now);
    }

    /// One frame, in the only order that avoids a frame of positional lag:
    /// scroll, reposition, uniforms, render.
    pub fn frame(
        &mut self,
        dt_sec: f32,
        now: f64,
        renderer: &mut dyn SceneRenderer<H>,
    ) -> anyhow::Result<()> {
        if !self.is_running() {
            return Ok(());
        }
        self.scroll.advance(dt_sec);
        self.registry.reposition(self.scroll.rendered(), &self.viewport);
        uniforms::push(
            &mut self.registry,
            &mut self.composite,
            self.config.time_step,
            self.scroll.normalized_speed(),
            now,
        );
        renderer.render(&FrameView {
            viewport: &self.viewport,
            camera: &self.camera,
            meshes: self.registry.meshes(),
            composite: &self.composite,
        })
    }
}
