use crate::core::constants::*;

/// Per-page tuning for the gallery.
///
/// Defaults come from `constants.rs`. Pages may override individual fields
/// (the web front-end reads `data-*` attributes on the container); call
/// [`GalleryConfig::validated`] before handing an overridden config to the
/// sketch so every field stays in a range the frame loop can live with.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub scroll_damping: f32,
    pub max_scroll_speed: f32,
    pub hover_duration_sec: f32,
    pub time_step: f32,
    pub distortion: f32,
    pub fade_edge: f32,
    pub camera_distance: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub plane_segments: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            scroll_damping: SCROLL_DAMPING,
            max_scroll_speed: MAX_SCROLL_SPEED,
            hover_duration_sec: HOVER_DURATION_SEC,
            time_step: TIME_STEP,
            distortion: DISTORTION_COEFFICIENT,
            fade_edge: DISTORTION_FADE_EDGE,
            camera_distance: CAMERA_DISTANCE,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            plane_segments: PLANE_SEGMENTS,
        }
    }
}

impl GalleryConfig {
    /// Clamp every field into its usable range. Non-finite values fall back
    /// to the default for that field.
    pub fn validated(self) -> Self {
        let d = Self::default();
        let pick = |v: f32, fallback: f32, lo: f32, hi: f32| {
            if v.is_finite() {
                v.clamp(lo, hi)
            } else {
                fallback
            }
        };
        let camera_near = pick(self.camera_near, d.camera_near, 0.01, 1.0e5);
        Self {
            // damping of 0 would freeze the scroll forever
            scroll_damping: pick(self.scroll_damping, d.scroll_damping, 0.001, 1.0),
            max_scroll_speed: pick(self.max_scroll_speed, d.max_scroll_speed, 1.0, 1.0e5),
            hover_duration_sec: pick(self.hover_duration_sec, d.hover_duration_sec, 0.0, 60.0),
            time_step: pick(self.time_step, d.time_step, 0.0, 10.0),
            distortion: pick(self.distortion, d.distortion, 0.0, 10.0),
            fade_edge: pick(self.fade_edge, d.fade_edge, 0.01, 1.0),
            camera_distance: pick(self.camera_distance, d.camera_distance, 1.0, 1.0e5),
            camera_near,
            camera_far: pick(self.camera_far, d.camera_far, camera_near * 2.0, 1.0e6),
            plane_segments: self.plane_segments.clamp(1, 128),
        }
    }
}
