//! Simulated frame clock for headless hosts and tests.

/// Frame interval used when none (or a non-positive one) is given, in
/// milliseconds.
pub const DEFAULT_FRAME_MS: f64 = 16.0;

/// Fixed-interval frame clock.
///
/// The clock only counts time; the caller feeds each returned delta to
/// whatever it animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    now_ms: f64,
    frame_ms: f64,
    frames: usize,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_MS)
    }
}

impl FrameClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new(frame_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            frame_ms: if frame_ms > 0.0 {
                frame_ms
            } else {
                DEFAULT_FRAME_MS
            },
            frames: 0,
        }
    }

    /// Elapsed time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Frame interval in milliseconds.
    #[must_use]
    pub const fn frame_ms(&self) -> f64 {
        self.frame_ms
    }

    /// Frames ticked so far.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Tick one full frame. Returns the delta.
    pub fn tick(&mut self) -> f64 {
        self.tick_by(self.frame_ms)
    }

    /// Tick one frame of `dt_ms`. Returns the delta.
    pub fn tick_by(&mut self, dt_ms: f64) -> f64 {
        self.now_ms += dt_ms;
        self.frames += 1;
        dt_ms
    }

    /// Frame deltas covering `ms`: full frames, then one shortened frame so
    /// the total lands exactly on `ms`.
    ///
    /// The deltas are not applied; pass each to [`Self::tick_by`].
    #[must_use]
    pub const fn split(&self, ms: f64) -> FrameSteps {
        FrameSteps {
            left: ms,
            frame_ms: self.frame_ms,
        }
    }
}

/// Iterator returned by [`FrameClock::split`].
#[derive(Debug, Clone, Copy)]
pub struct FrameSteps {
    left: f64,
    frame_ms: f64,
}

impl Iterator for FrameSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.left <= 0.0 || !self.left.is_finite() {
            return None;
        }
        let dt = self.left.min(self.frame_ms);
        self.left -= dt;
        Some(dt)
    }
}
