use crate::core::constants::{MAX_FRAME_DT_SEC, REFERENCE_FRAME_SEC, REST_EPSILON};

/// Smoothed scroll offset decoupled from the native scroll position.
///
/// Native scroll events only move `target`; once per frame [`advance`]
/// pulls `rendered` a fixed fraction of the way toward it. The lag between
/// the two is what gives the meshes their parallax feel.
///
/// [`advance`]: SmoothScroll::advance
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    target: f32,
    rendered: f32,
    speed: f32,
    damping: f32,
    max_speed: f32,
}

impl SmoothScroll {
    pub fn new(damping: f32, max_speed: f32) -> Self {
        Self {
            target: 0.0,
            rendered: 0.0,
            speed: 0.0,
            damping: damping.clamp(f32::EPSILON, 1.0),
            max_speed: max_speed.max(f32::EPSILON),
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn rendered(&self) -> f32 {
        self.rendered
    }

    /// `rendered` delta of the last frame (previous minus current), clamped
    /// to `±max_speed`.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Speed scaled into [-1, 1]; this is what the distortion pass consumes.
    #[inline]
    pub fn normalized_speed(&self) -> f32 {
        self.speed / self.max_speed
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.rendered == self.target
    }

    pub fn on_native_scroll(&mut self, raw_offset: f32) {
        if !raw_offset.is_finite() {
            log::debug!("[scroll] ignoring non-finite offset {raw_offset}");
            return;
        }
        self.target = raw_offset;
    }

    /// Place both offsets at `offset` without animating.
    pub fn jump_to(&mut self, offset: f32) {
        if offset.is_finite() {
            self.target = offset;
            self.rendered = offset;
            self.speed = 0.0;
        }
    }

    /// Move `rendered` toward `target` for a frame that lasted `dt_sec`.
    ///
    /// The damping factor is defined per 60 Hz frame and rescaled to `dt`,
    /// so slow and fast displays converge at the same wall-clock rate. A
    /// zero (or invalid) `dt` leaves the state untouched.
    pub fn advance(&mut self, dt_sec: f32) {
        if !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        let dt = dt_sec.min(MAX_FRAME_DT_SEC);
        let alpha = 1.0 - (1.0 - self.damping).powf(dt / REFERENCE_FRAME_SEC);
        let prev = self.rendered;
        let gap = self.target - self.rendered;
        let next = self.rendered + gap * alpha;
        // at large offsets the step can fall below f32 resolution
        if gap.abs() < REST_EPSILON || next == self.rendered {
            self.rendered = self.target;
        } else {
            self.rendered = next;
        }
        self.speed = (prev - self.rendered).clamp(-self.max_speed, self.max_speed);
    }
}
