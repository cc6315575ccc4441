use crate::core::camera::Camera;
use crate::core::layout::Viewport;
use crate::core::registry::TrackedImage;
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Pointer hit on a mesh surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
    /// (0, 0) bottom-left, (1, 1) top-right, like the mesh texture coords.
    pub uv: [f32; 2],
}

/// Client pixel coordinates to normalized device coordinates in [-1, 1]
/// (+Y up).
#[inline]
pub fn ndc_from_client(client_x: f32, client_y: f32, viewport: &Viewport) -> [f32; 2] {
    [
        (client_x / viewport.width) * 2.0 - 1.0,
        1.0 - (client_y / viewport.height) * 2.0,
    ]
}

impl Ray {
    /// World-space ray from the camera through an NDC point.
    pub fn from_ndc(camera: &Camera, ndc: [f32; 2]) -> Self {
        let inv = camera.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc[0], ndc[1], 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let origin = camera.eye;
        Self {
            origin,
            dir: (p1 - origin).normalize(),
        }
    }

    /// Distance along the ray to the plane `z = plane_z`, if it lies ahead.
    #[inline]
    pub fn hit_plane_z(&self, plane_z: f32) -> Option<f32> {
        if self.dir.z.abs() < 1e-6 {
            return None;
        }
        let t = (plane_z - self.origin.z) / self.dir.z;
        (t >= 0.0).then_some(t)
    }
}

/// Frontmost mesh under the ray. Meshes are axis-aligned quads facing the
/// camera; on equal distance the later one wins since it is drawn on top.
pub fn pick<H>(ray: &Ray, meshes: &[TrackedImage<H>]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (index, m) in meshes.iter().enumerate() {
        let Some(t) = ray.hit_plane_z(m.position.z) else {
            continue;
        };
        let p = ray.origin + ray.dir * t;
        let u = (p.x - (m.position.x - m.rect.width / 2.0)) / m.rect.width;
        let v = (p.y - (m.position.y - m.rect.height / 2.0)) / m.rect.height;
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            continue;
        }
        match best {
            Some(b) if t > b.distance => {}
            _ => {
                best = Some(Hit {
                    index,
                    distance: t,
                    uv: [u, v],
                })
            }
        }
    }
    best
}
