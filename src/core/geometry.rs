/// Vertex of an image plane: local position plus GL-style texture coords.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Subdivided plane of `width` × `height` centred on the origin in the XY
/// plane, `segments` quads per side. UV (0, 0) is the bottom-left corner.
///
/// The subdivision is there for the hover wave in the vertex shader.
pub fn plane(width: f32, height: f32, segments: u32) -> (Vec<PlaneVertex>, Vec<u32>) {
    let n = segments.max(1);
    let row = n + 1;
    let mut vertices = Vec::with_capacity((row * row) as usize);
    for iy in 0..=n {
        let v = iy as f32 / n as f32;
        for ix in 0..=n {
            let u = ix as f32 / n as f32;
            vertices.push(PlaneVertex {
                position: [(u - 0.5) * width, (v - 0.5) * height, 0.0],
                uv: [u, v],
            });
        }
    }
    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for iy in 0..n {
        for ix in 0..n {
            let a = iy * row + ix;
            let b = a + 1;
            let c = a + row;
            let d = c + 1;
            // counter-clockwise seen from +Z
            indices.extend_from_slice(&[a, b, d, a, d, c]);
        }
    }
    (vertices, indices)
}
