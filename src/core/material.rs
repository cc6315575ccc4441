use crate::core::constants::HOVER_CENTER_UV;
use glam::Vec3;

/// Per-mesh shader inputs. Every mesh owns its own copy, cloned from the
/// registry's template when the mesh is bound.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialUniforms {
    pub time: f32,
    /// Last surface coordinate the pointer hit on this mesh.
    pub hover: [f32; 2],
    /// Cross-fade amount in [0, 1].
    pub hover_state: f32,
}

impl Default for MaterialUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            hover: HOVER_CENTER_UV,
            hover_state: 0.0,
        }
    }
}

// Layout mirrors `struct Material` in shaders/mesh.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialRaw {
    pub offset: [f32; 4], // offset 0, size 16
    pub hover: [f32; 2],  // offset 16, size 8
    pub time: f32,        // offset 24
    pub hover_state: f32, // offset 28 -> total 32
}

impl MaterialUniforms {
    pub fn to_raw(&self, position: Vec3) -> MaterialRaw {
        MaterialRaw {
            offset: [position.x, position.y, position.z, 0.0],
            hover: self.hover,
            time: self.time,
            hover_state: self.hover_state,
        }
    }
}

// Layout mirrors `struct CameraUniforms` in shaders/mesh.wgsl.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraRaw {
    pub view_proj: [[f32; 4]; 4],
}
