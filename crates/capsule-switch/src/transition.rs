//! Animated transition between the two resting states.
//!
//! A transition eases the slider x and the track color in lockstep. The
//! animator owns no clock: the host calls [`TransitionAnimator::advance`]
//! from its frame loop and applies the returned [`Tick`].

use capsule_core::{Color, EasedValue, Easing};

/// Slider position and track color at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    /// Slider center x
    pub slider_x: f32,
    /// Track fill
    pub track_color: Color,
}

impl TransitionFrame {
    /// Create a new frame.
    #[must_use]
    pub const fn new(slider_x: f32, track_color: Color) -> Self {
        Self {
            slider_x,
            track_color,
        }
    }
}

/// Result of advancing the animator by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// No transition in flight
    Idle,
    /// Intermediate frame
    Running(TransitionFrame),
    /// The transition reached its target on this tick
    Completed {
        /// Final frame, exactly the target endpoint
        frame: TransitionFrame,
        /// Checked state the transition was heading for
        checked: bool,
    },
}

#[derive(Debug, Clone)]
struct Transition {
    slider: EasedValue<f32>,
    color: EasedValue<Color>,
    target: bool,
}

impl Transition {
    fn frame(&self) -> TransitionFrame {
        TransitionFrame::new(self.slider.value(), self.color.value())
    }
}

/// Drives at most one transition at a time.
#[derive(Debug, Clone, Default)]
pub struct TransitionAnimator {
    active: Option<Transition>,
    easing: Easing,
}

impl TransitionAnimator {
    /// Create an idle animator.
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        Self {
            active: None,
            easing,
        }
    }

    /// Curve used by transitions started from now on.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the curve for transitions started from now on.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Start a transition from `from` to `to` lasting `duration_ms`.
    ///
    /// A transition already in flight is dropped without completing.
    /// Returns `true` if one was dropped.
    pub fn start(
        &mut self,
        from: TransitionFrame,
        to: TransitionFrame,
        target: bool,
        duration_ms: u64,
    ) -> bool {
        let cancelled = self.cancel();
        let duration = duration_ms as f64;
        self.active = Some(Transition {
            slider: EasedValue::new(from.slider_x, to.slider_x, duration).with_easing(self.easing),
            color: EasedValue::new(from.track_color, to.track_color, duration)
                .with_easing(self.easing),
            target,
        });
        log::trace!("transition to {target} started over {duration_ms}ms");
        cancelled
    }

    /// Drop the transition in flight, if any. No completion is reported.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(t) => {
                log::trace!("transition to {} cancelled", t.target);
                true
            }
            None => false,
        }
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the transition in flight.
    #[must_use]
    pub fn target(&self) -> Option<bool> {
        self.active.as_ref().map(|t| t.target)
    }

    /// Current frame of the transition in flight.
    #[must_use]
    pub fn frame(&self) -> Option<TransitionFrame> {
        self.active.as_ref().map(Transition::frame)
    }

    /// Progress of the transition in flight, from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.active.as_ref().map(|t| t.slider.progress())
    }

    /// Advance by `dt_ms` milliseconds.
    ///
    /// Completion is reported exactly once, on the tick that reaches the
    /// target. A zero-length transition completes on its first tick.
    pub fn advance(&mut self, dt_ms: f64) -> Tick {
        let Some(transition) = self.active.as_mut() else {
            return Tick::Idle;
        };
        transition.slider.update(dt_ms);
        transition.color.update(dt_ms);

        if transition.slider.is_complete() && transition.color.is_complete() {
            let frame = transition.frame();
            let checked = transition.target;
            self.active = None;
            log::trace!("transition to {checked} completed");
            Tick::Completed { frame, checked }
        } else {
            Tick::Running(transition.frame())
        }
    }
}
