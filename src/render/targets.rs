use super::helpers;

/// Offscreen colour target the scene pass renders into and the distortion
/// pass samples as `tDiffuse`. Same format as the surface so the composite
/// is a straight copy when scroll speed is zero.
pub(crate) struct SceneTarget {
    pub(crate) format: wgpu::TextureFormat,
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl SceneTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (tex, view) = helpers::create_color_texture(
            device,
            "scene_tex",
            width,
            height,
            format,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        Self { format, tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.tex.destroy();
        *self = Self::new(device, self.format, width, height);
    }
}
