//! Scroll-driven screen distortion.
//!
//! The GPU version lives in `shaders/post.wgsl`; [`distort_uv`] is the same
//! math on the CPU so the behaviour can be checked without a device.

use crate::core::config::GalleryConfig;

/// Inputs of the distortion pass.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeUniforms {
    /// Normalized scroll speed in [-1, 1]; 0 means no skew at all.
    pub scroll_speed: f32,
    pub distortion: f32,
    pub fade_edge: f32,
}

impl CompositeUniforms {
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            scroll_speed: 0.0,
            distortion: config.distortion,
            fade_edge: config.fade_edge,
        }
    }

    pub fn to_raw(&self) -> CompositeRaw {
        CompositeRaw {
            scroll_speed: self.scroll_speed,
            distortion: self.distortion,
            fade_edge: self.fade_edge,
            _pad: 0.0,
        }
    }
}

// Layout mirrors `struct Distortion` in shaders/post.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CompositeRaw {
    pub scroll_speed: f32,
    pub distortion: f32,
    pub fade_edge: f32,
    pub _pad: f32,
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Weight of the skew at a given `uv.y`: 1 at the bottom edge (`uv.y = 0`),
/// fading to 0 at `fade_edge` and above.
#[inline]
pub fn fade_weight(uv_y: f32, fade_edge: f32) -> f32 {
    1.0 - smoothstep(0.0, fade_edge, uv_y)
}

/// Horizontal-only skew of a screen coordinate, scaled by scroll speed.
pub fn distort_uv(uv: [f32; 2], uniforms: &CompositeUniforms) -> [f32; 2] {
    let area = fade_weight(uv[1], uniforms.fade_edge);
    let shift = (uv[0] - 0.5) * uniforms.distortion * area * uniforms.scroll_speed;
    [uv[0] - shift, uv[1]]
}
