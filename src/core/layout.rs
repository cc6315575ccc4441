use glam::Vec3;

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// An element's on-page rectangle, captured once when it was bound.
///
/// `top`/`left` are page coordinates (scroll offset already added), so the
/// rectangle stays valid no matter where the page was scrolled at capture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Nothing to render: zero or negative area, or a coordinate that is not
    /// a number.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        !finite || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Scene-space centre of a mesh for the given scroll offset.
///
/// The camera looks down -Z with its FOV chosen so one world unit is one CSS
/// pixel on the z = 0 plane; the origin is the viewport centre and +Y is up.
#[inline]
pub fn mesh_position(rect: &LayoutRect, scroll_offset: f32, viewport: &Viewport) -> Vec3 {
    let x = rect.left - viewport.width / 2.0 + rect.width / 2.0;
    let y = scroll_offset - rect.top + viewport.height / 2.0 - rect.height / 2.0;
    Vec3::new(x, y, 0.0)
}
