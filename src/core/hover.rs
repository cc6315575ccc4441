/// Where a mesh is in its hover cross-fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Entering,
    Hovering,
    Leaving,
}

/// Wall-clock tween of a mesh's `hoverState` between 0 and 1.
///
/// The value is a function of `now`, not of how many frames ran, so it
/// keeps pace when the frame rate drops. Retargeting mid-flight restarts
/// the tween from the current value rather than from an endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTween {
    from: f32,
    target: f32,
    started_at: f64,
    duration: f32,
}

impl HoverTween {
    pub fn new(duration_sec: f32) -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            started_at: 0.0,
            duration: duration_sec.max(0.0),
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn enter(&mut self, now: f64) {
        self.retarget(1.0, now);
    }

    pub fn leave(&mut self, now: f64) {
        self.retarget(0.0, now);
    }

    fn retarget(&mut self, target: f32, now: f64) {
        if self.target == target {
            return;
        }
        self.from = self.value(now);
        self.target = target;
        self.started_at = now;
    }

    /// Eased progress in [0, 1] since the last retarget.
    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = ((now - self.started_at) as f32 / self.duration).clamp(0.0, 1.0);
        ease_out_quad(t)
    }

    pub fn value(&self, now: f64) -> f32 {
        let p = self.progress(now);
        self.from + (self.target - self.from) * p
    }

    pub fn phase(&self, now: f64) -> HoverPhase {
        let settled = self.progress(now) >= 1.0;
        match (self.target > 0.5, settled) {
            (true, true) => HoverPhase::Hovering,
            (true, false) => HoverPhase::Entering,
            (false, true) => HoverPhase::Idle,
            (false, false) => HoverPhase::Leaving,
        }
    }
}

#[inline]
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
