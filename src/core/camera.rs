use crate::core::layout::Viewport;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera sitting on +Z and looking at the origin.
///
/// The vertical FOV is derived from the viewport height so that the z = 0
/// plane maps 1:1 to page pixels: `fov = 2 * atan(height / (2 * distance))`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn for_viewport(viewport: &Viewport, distance: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: pixel_perfect_fov(viewport.height, distance),
            znear,
            zfar,
        }
    }

    /// Recompute aspect and FOV after a resize. Depends only on the inputs,
    /// so calling it repeatedly with the same viewport changes nothing.
    pub fn fit_viewport(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
        self.fovy_radians = pixel_perfect_fov(viewport.height, self.distance());
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[inline]
pub fn pixel_perfect_fov(viewport_height: f32, distance: f32) -> f32 {
    2.0 * (viewport_height / (2.0 * distance.max(f32::EPSILON))).atan()
}
