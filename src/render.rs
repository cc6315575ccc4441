use crate::core::material::CameraRaw;
use crate::core::registry::TrackedImage;
use crate::core::{FrameView, SceneRenderer, Viewport};
use crate::dom;
use web_sys as web;

mod helpers;
mod meshes;
mod post;
mod targets;

use meshes::{MeshGpu, MeshPipeline};
use post::PostResources;
use targets::SceneTarget;

/// WebGPU state for the gallery canvas.
///
/// Pass 1 draws every image plane into `scene`; pass 2 samples `scene`
/// through the distortion shader into the swapchain.
pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneTarget,
    mesh_pipeline: MeshPipeline,
    meshes: Vec<MeshGpu>,
    post: PostResources,
    linear_sampler: wgpu::Sampler,
    plane_segments: u32,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement, plane_segments: u32) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits: older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // page content under the canvas must stay visible around the planes
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene = SceneTarget::new(&device, format, width, height);
        let linear_sampler = helpers::linear_sampler(&device, "linear_sampler");
        let mesh_pipeline = meshes::create_mesh_pipeline(&device, format);
        let post = post::create_post_resources(&device, format, &scene.view, &linear_sampler);
        log::info!("[gpu] ready {width}x{height} {format:?}");

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            scene,
            mesh_pipeline,
            meshes: Vec::new(),
            post,
            linear_sampler,
            plane_segments,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate the offscreen target and the bind group sampling it
            self.scene.recreate(&self.device, width, height);
            self.post
                .rebuild_bind_group(&self.device, &self.scene.view, &self.linear_sampler);
            log::debug!("[gpu] resized to {width}x{height}");
        }
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Release every per-mesh GPU resource.
    pub fn clear_meshes(&mut self) {
        for m in self.meshes.drain(..) {
            m.destroy();
        }
    }
}

impl SceneRenderer<web::HtmlImageElement> for GpuState {
    fn add_mesh(&mut self, mesh: &TrackedImage<web::HtmlImageElement>) -> anyhow::Result<()> {
        let gpu = MeshGpu::new(
            &self.device,
            &self.queue,
            &self.mesh_pipeline,
            &self.linear_sampler,
            mesh,
            self.plane_segments,
        )?;
        self.meshes.push(gpu);
        Ok(())
    }

    fn resize(&mut self, viewport: &Viewport) {
        dom::size_canvas_to(&self.canvas, viewport);
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.resize_if_needed(w, h);
    }

    fn render(&mut self, frame: &FrameView<'_, web::HtmlImageElement>) -> anyhow::Result<()> {
        let camera = CameraRaw {
            view_proj: frame.camera.view_projection().to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.mesh_pipeline.camera_buffer, 0, bytemuck::bytes_of(&camera));
        for (gpu, mesh) in self.meshes.iter().zip(frame.meshes) {
            gpu.write_material(&self.queue, &mesh.material.to_raw(mesh.position));
        }
        self.post.write_uniforms(&self.queue, frame.composite);

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // skip this frame; the next one draws into the fresh swapchain
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(anyhow::anyhow!("surface error: {:?}", e)),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: image planes -> offscreen scene target
        {
            let mut rpass = helpers::color_pass(
                &mut encoder,
                "scene_pass",
                &self.scene.view,
                wgpu::Color::TRANSPARENT,
            );
            rpass.set_pipeline(&self.mesh_pipeline.pipeline);
            rpass.set_bind_group(0, &self.mesh_pipeline.camera_bg, &[]);
            for gpu in &self.meshes {
                gpu.draw(&mut rpass);
            }
        }

        // Pass 2: distortion -> swapchain
        self.post.blit(&mut encoder, &view);

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
