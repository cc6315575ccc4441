use crate::core::scene::SceneRenderer;
use crate::core::sketch::Sketch;
use instant::Instant;
use std::cell::Cell;

/// Source of "now" in seconds for the frame loop and hover tweens.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock backed by `instant` (performance.now() on the web).
pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to; lets tests step synthetic frames.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, dt_sec: f64) {
        self.now.set(self.now.get() + dt_sec);
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Drives [`Sketch::frame`] once per display refresh.
///
/// The platform decides when to call [`tick`](FrameDriver::tick) (RAF on
/// the web, a plain loop in tests); the driver only measures time between
/// ticks and keeps count. Render errors are logged and never stop the loop.
pub struct FrameDriver<C: Clock> {
    clock: C,
    last: Option<f64>,
    frames: u64,
    running: bool,
}

impl<C: Clock> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last: None,
            frames: 0,
            running: true,
        }
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("[frame] stopped after {} frames", self.frames);
        }
    }

    /// Run one frame. Returns `false` once the driver has been stopped, which
    /// tells the caller not to schedule another tick.
    pub fn tick<H>(&mut self, sketch: &mut Sketch<H>, renderer: &mut dyn SceneRenderer<H>) -> bool {
        if !self.running {
            return false;
        }
        let now = self.clock.now();
        // first frame has no predecessor: treat it as dt = 0
        let dt = self.last.map(|l| (now - l).max(0.0)).unwrap_or(0.0) as f32;
        self.last = Some(now);
        if let Err(e) = sketch.frame(dt, now, renderer) {
            log::error!("render error: {:?}", e);
        }
        self.frames += 1;
        true
    }
}
